//! Kafo is a crate providing the building blocks of a Puppet module installer:
//! following the progress of a Puppet run from its output, reading answer
//! files and validating user supplied values.
//!
//! # Quick Start
//!
//! ```rust
//! use kafo::{ProgressTrackerBuilder, RecordingRenderer, Total};
//!
//! let mut tracker = ProgressTrackerBuilder::new().build_with(RecordingRenderer::new());
//! for line in [
//!     "Info: /Stage[main]/Motd/File[/etc/motd]: Starting to evaluate the resource (1 of 2)",
//!     "Info: /Stage[main]/Motd/File[/etc/issue]: Starting to evaluate the resource (2 of 2)",
//! ] {
//!     tracker.update(line);
//! }
//! assert_eq!(tracker.lines_done(), 1);
//! assert_eq!(tracker.total(), Total::Known(2));
//! tracker.close();
//! ```
//!
//! # Module Organization
//!
//! The kafo crate is organized into several modules:
//!
//! - [`tracker`] - Classification of Puppet output and the `ProgressTracker` state machine
//! - [`progress`] - The `Renderer` contract, bar styling and the indicatif renderer
//! - [`answer_file`] - Loading and validating answer files
//! - [`data_types`] - Validators for user supplied values
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod answer_file;
pub mod data_types;
pub mod error;
pub mod progress;
pub mod tracker;

pub use answer_file::{AnswerFile, AnswerFileVersion, PuppetClass, Reporter, TracingReporter};
pub use data_types::{DataType, PatternType, RegexpType, StringType};
pub use error::{Error, Result};
pub use progress::{
    BarRenderer, ProgressBarOpts, RecordingRenderer, RenderRequest, Renderer, StyleOptions, Total,
};
pub use tracker::{classify, ProgressTracker, ProgressTrackerBuilder, Signal, TrackerConfig};
