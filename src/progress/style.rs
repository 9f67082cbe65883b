//! Progress bar styling and configuration options.
//!
//! An installation starts with an *infinite* bar (a spinner, since nothing is
//! known about the amount of work yet) and switches to a *finite* bar as soon
//! as Puppet reports how many resources it is going to evaluate.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use kafo::progress::StyleOptions;
//!
//! // `Installing... <resource> [ 42%] [.......    ]`
//! let style_options = StyleOptions::default();
//! assert!(style_options.is_enabled());
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use kafo::progress::{ProgressBarOpts, StyleOptions};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("{msg} {pos}/{len} [{bar:20}]".to_string()),
//!         Some("#>-".to_string()),
//!         true,
//!         false,
//!     ),
//!     ProgressBarOpts::spinner(),
//! );
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use kafo::progress::{ProgressBarOpts, StyleOptions};
//!
//! let hidden_style = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
//! assert!(!hidden_style.is_enabled());
//! ```

use crate::error::{Error, Result};

use console::measure_text_width;
use indicatif::ProgressStyle;
use std::time::Duration;

/// Define the installer bar style options.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options once the total is known.
    pub(crate) finite: ProgressBarOpts,
    /// Style options while the total is unknown.
    pub(crate) infinite: ProgressBarOpts,
    /// Minimum delay between two non-forced redraws.
    pub(crate) refresh_interval: Duration,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            finite: ProgressBarOpts::installing(),
            infinite: ProgressBarOpts::spinner(),
            refresh_interval: StyleOptions::DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl StyleOptions {
    /// Redraw at most ten times per second unless forced.
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

    /// Create new [`StyleOptions`].
    pub fn new(finite: ProgressBarOpts, infinite: ProgressBarOpts) -> Self {
        Self {
            finite,
            infinite,
            refresh_interval: StyleOptions::DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Set the options for the finite bar.
    pub fn set_finite(&mut self, finite: ProgressBarOpts) {
        self.finite = finite;
    }

    /// Set the options for the infinite bar.
    pub fn set_infinite(&mut self, infinite: ProgressBarOpts) {
        self.infinite = infinite;
    }

    /// Set the minimum delay between two non-forced redraws.
    pub fn set_refresh_interval(&mut self, refresh_interval: Duration) {
        self.refresh_interval = refresh_interval;
    }

    /// Return `false` if neither bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.finite.enabled || self.infinite.enabled
    }

    /// Get a reference to the finite bar options.
    pub fn finite(&self) -> &ProgressBarOpts {
        &self.finite
    }

    /// Get a reference to the infinite bar options.
    pub fn infinite(&self) -> &ProgressBarOpts {
        &self.infinite
    }

    /// Get the minimum delay between two non-forced redraws.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set: "filled", optional "current", "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// The installer's finite bar.
    ///
    /// `Installing... Service[httpd]                                    [ 42%] [................                        ]`
    pub const TEMPLATE_INSTALLING: &'static str =
        "Installing... {msg} [{percent:>3}%] [{bar:40}]";
    /// The installer's infinite bar.
    ///
    /// `Installing... Prefetching yumrepo resources for yumrepo   ⠙`
    pub const TEMPLATE_SPINNER: &'static str = "Installing... {msg} {spinner}";
    /// Dots on blank padding: `". "`.
    pub const CHARS_DOTS: &'static str = ". ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// The finite `Installing... [ NN%]` bar drawn with dots.
    pub fn installing() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_INSTALLING.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_DOTS.into()),
            enabled: true,
            clear: false,
        }
    }

    /// The infinite `Installing...` spinner.
    pub fn spinner() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_SPINNER.into()),
            progress_chars: None,
            enabled: true,
            clear: false,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Return `true` if the bar is drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Return `true` if the bar is cleared upon completion.
    pub fn clear(&self) -> bool {
        self.clear
    }

    /// Create a bar [`ProgressStyle`] based on the provided options.
    pub fn to_bar_style(&self) -> Result<ProgressStyle> {
        self.apply(ProgressStyle::default_bar())
    }

    /// Create a spinner [`ProgressStyle`] based on the provided options.
    pub fn to_spinner_style(&self) -> Result<ProgressStyle> {
        self.apply(ProgressStyle::default_spinner())
    }

    fn apply(&self, mut style: ProgressStyle) -> Result<ProgressStyle> {
        if let Some(template) = &self.template {
            style = style
                .template(template)
                .map_err(|e| Error::InvalidTemplate(format!("{template:?}: {e}")))?;
        }
        if let Some(progress_chars) = &self.progress_chars {
            check_progress_chars(progress_chars)?;
            style = style.progress_chars(progress_chars);
        }
        Ok(style)
    }
}

/// indicatif panics unless it gets at least two characters of equal width.
fn check_progress_chars(progress_chars: &str) -> Result<()> {
    let widths: Vec<usize> = progress_chars
        .chars()
        .map(|c| measure_text_width(c.encode_utf8(&mut [0; 4])))
        .collect();

    if widths.len() < 2 {
        return Err(Error::InvalidProgressChars(format!(
            "{progress_chars:?}: at least 2 characters required"
        )));
    }
    if widths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(Error::InvalidProgressChars(format!(
            "{progress_chars:?}: characters must have the same width"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_progress_chars() {
        assert!(check_progress_chars(ProgressBarOpts::CHARS_DOTS).is_ok());
        assert!(check_progress_chars("#>-").is_ok());
        assert!(check_progress_chars("█▓░").is_ok());
        assert!(check_progress_chars("").is_err());
        assert!(check_progress_chars("#").is_err());
        assert!(check_progress_chars("#中").is_err());
    }
}
