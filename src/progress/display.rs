//! Terminal rendering of an installation's progress.
//!
//! [`BarRenderer`] draws [`RenderRequest`]s with an indicatif progress bar on
//! stderr. It starts as a spinner and becomes a finite bar once a request
//! carries a known total.
//!
//! # Examples
//!
//! ```rust
//! use kafo::progress::{BarRenderer, RenderRequest, Renderer, StyleOptions, Total};
//!
//! # fn example() -> kafo::Result<()> {
//! let mut renderer = BarRenderer::new(StyleOptions::default())?;
//! renderer.show(&RenderRequest {
//!     message: "Service[httpd]".to_string(),
//!     done: 3,
//!     total: Total::Known(10),
//!     forced: true,
//! });
//! renderer.close();
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::progress::render::{RenderRequest, Renderer, Total};
use crate::progress::{ProgressBarOpts, StyleOptions};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Draws the progress of a Puppet run on the terminal.
pub struct BarRenderer {
    bar: ProgressBar,
    finite_style: ProgressStyle,
    finite_opts: ProgressBarOpts,
    infinite_opts: ProgressBarOpts,
    finite: bool,
    refresh_interval: Duration,
    last_draw: Option<Instant>,
}

impl BarRenderer {
    /// Create a renderer drawing on stderr. Each bar stays hidden when its
    /// options disable it.
    pub fn new(style_options: StyleOptions) -> Result<Self> {
        let finite_style = style_options.finite().to_bar_style()?;
        let spinner_style = style_options.infinite().to_spinner_style()?;

        let bar = match style_options.infinite().is_enabled() {
            true => ProgressBar::new_spinner(),
            false => ProgressBar::hidden(),
        };
        bar.set_style(spinner_style);

        Ok(Self {
            bar,
            finite_style,
            finite_opts: style_options.finite().clone(),
            infinite_opts: style_options.infinite().clone(),
            finite: false,
            refresh_interval: style_options.refresh_interval(),
            last_draw: None,
        })
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Whether the bar switched to its finite style.
    pub fn is_finite(&self) -> bool {
        self.finite
    }

    /// Options of the bar currently in use.
    pub fn active_options(&self) -> &ProgressBarOpts {
        match self.finite {
            true => &self.finite_opts,
            false => &self.infinite_opts,
        }
    }

    fn due(&self) -> bool {
        self.last_draw
            .map_or(true, |last| last.elapsed() >= self.refresh_interval)
    }
}

impl Renderer for BarRenderer {
    fn show(&mut self, request: &RenderRequest) {
        if !request.forced && !self.due() {
            return;
        }

        if let Total::Known(total) = request.total {
            if !self.finite {
                debug!("Switching to a finite bar of {} resources", total);
                if self.finite_opts.is_enabled() != self.infinite_opts.is_enabled() {
                    self.bar.set_draw_target(draw_target(self.finite_opts.is_enabled()));
                }
                self.bar.set_style(self.finite_style.clone());
                self.finite = true;
            }
            self.bar.set_length(total);
        }
        self.bar.set_position(request.done);
        self.bar.set_message(request.message.clone());
        self.bar.tick();
        self.last_draw = Some(Instant::now());
    }

    fn print(&mut self, line: &str) {
        self.bar.suspend(|| eprintln!("{line}"));
    }

    fn close(&mut self) {
        if self.active_options().clear() {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}

fn draw_target(enabled: bool) -> ProgressDrawTarget {
    match enabled {
        true => ProgressDrawTarget::stderr(),
        false => ProgressDrawTarget::hidden(),
    }
}
