//! Tracker module following the progress of a Puppet run from its output.
//!
//! # Overview
//!
//! - `signal` - Classification of output lines into [`Signal`]s
//! - `tracker` - The [`ProgressTracker`] state machine
//! - `builder` - [`ProgressTrackerBuilder`] for configuring trackers
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ## Following a Puppet Run
//!
//! ```rust,no_run
//! use kafo::tracker::ProgressTrackerBuilder;
//! use std::io::BufReader;
//! use std::process::{Command, Stdio};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut child = Command::new("puppet")
//!     .args(["apply", "--evaltrace", "site.pp"])
//!     .stdout(Stdio::piped())
//!     .spawn()?;
//!
//! let mut tracker = ProgressTrackerBuilder::new().build()?;
//! if let Some(stdout) = child.stdout.take() {
//!     tracker.consume(BufReader::new(stdout))?;
//! }
//! tracker.close();
//! child.wait()?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod signal;
pub mod tracker;

pub use builder::ProgressTrackerBuilder;
pub use config::TrackerConfig;
pub use signal::{canonical_resource, classify, Signal};
pub use tracker::ProgressTracker;
