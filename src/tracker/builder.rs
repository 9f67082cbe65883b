//! Builder pattern implementation for creating ProgressTracker instances.
//!
//! # Examples
//!
//! ## Terminal Progress
//!
//! ```rust
//! use kafo::tracker::ProgressTrackerBuilder;
//!
//! # fn example() -> kafo::Result<()> {
//! let mut tracker = ProgressTrackerBuilder::new().width(60).build()?;
//! tracker.update("MONITOR_RESOURCE Service[httpd]");
//! tracker.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Renderer
//!
//! ```rust
//! use kafo::progress::RecordingRenderer;
//! use kafo::tracker::ProgressTrackerBuilder;
//!
//! let tracker = ProgressTrackerBuilder::new()
//!     .refresh_every(5)
//!     .build_with(RecordingRenderer::new());
//! ```

use super::{config::TrackerConfig, tracker::ProgressTracker};
use crate::error::Result;
use crate::progress::{BarRenderer, Renderer};
use crate::{ProgressBarOpts, StyleOptions};

/// A builder used to create a [`ProgressTracker`].
///
/// ```rust
/// # fn main() -> kafo::Result<()> {
/// use kafo::tracker::ProgressTrackerBuilder;
///
/// let tracker = ProgressTrackerBuilder::hidden().width(40).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ProgressTrackerBuilder {
    config: TrackerConfig,
}

impl ProgressTrackerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressTrackerBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = ProgressTrackerBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Set the width of the message shown next to the bar.
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set how many lines pass between two redraws while the total is unknown.
    ///
    /// `0` disables these periodic redraws.
    pub fn refresh_every(mut self, refresh_every: u64) -> Self {
        self.config.refresh_every = refresh_every;
        self
    }

    /// Set the terminal style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Create a [`ProgressTracker`] drawing on the terminal.
    pub fn build(self) -> Result<ProgressTracker<BarRenderer>> {
        let renderer = BarRenderer::new(self.config.style_options.clone())?;
        Ok(ProgressTracker::new(self.config, renderer))
    }

    /// Create a [`ProgressTracker`] sending its requests to `renderer`.
    pub fn build_with<R: Renderer>(self, renderer: R) -> ProgressTracker<R> {
        ProgressTracker::new(self.config, renderer)
    }
}
