//! Core tracker implementation.
//!
//! The [`ProgressTracker`] consumes the output of a Puppet run line by line,
//! keeps count of the evaluated resources and asks its [`Renderer`] to redraw
//! when something worth showing happened.
//!
//! # Examples
//!
//! ```rust
//! use kafo::progress::{RecordingRenderer, Total};
//! use kafo::tracker::ProgressTrackerBuilder;
//!
//! let mut tracker = ProgressTrackerBuilder::new().build_with(RecordingRenderer::new());
//! tracker.update("MONITOR_RESOURCE Foo[bar]");
//! tracker.update("Stage/main/Foo[bar]: Starting to evaluate the resource");
//! tracker.update("Stage/main/Foo[bar]: Evaluated in 0.01 seconds");
//! assert_eq!(tracker.lines_done(), 1);
//! assert_eq!(tracker.total(), Total::Known(1));
//!
//! let renderer = tracker.close();
//! assert!(renderer.is_closed());
//! ```

use super::config::TrackerConfig;
use super::signal::{classify, Signal};
use crate::error::Result;
use crate::progress::{RenderRequest, Renderer, Total};

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::io::BufRead;
use tracing::{debug, trace};

/// Message shown by the final render.
const DONE_MESSAGE: &str = "Done";

/// Tracks the progress of a single Puppet run.
///
/// A tracker is created for one run and consumed by [`close`](Self::close)
/// when the run ends.
pub struct ProgressTracker<R: Renderer> {
    config: TrackerConfig,
    renderer: R,
    lines_done: u64,
    lines_seen: u64,
    total: Total,
    pending_resources: HashSet<String>,
}

impl<R: Renderer> Debug for ProgressTracker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("config", &self.config)
            .field("lines_done", &self.lines_done)
            .field("lines_seen", &self.lines_seen)
            .field("total", &self.total)
            .field("pending_resources", &self.pending_resources.len())
            .finish()
    }
}

impl<R: Renderer> ProgressTracker<R> {
    /// Creates a new tracker with the given configuration.
    pub(crate) fn new(config: TrackerConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            lines_done: 0,
            lines_seen: 0,
            total: Total::Unknown,
            pending_resources: HashSet::new(),
        }
    }

    /// Number of resources known to be evaluated.
    pub fn lines_done(&self) -> u64 {
        self.lines_done
    }

    /// Number of lines processed so far.
    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Expected number of resources.
    pub fn total(&self) -> Total {
        self.total
    }

    /// Resources announced but not evaluated yet.
    pub fn pending_resources(&self) -> &HashSet<String> {
        &self.pending_resources
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Process one line of Puppet output.
    ///
    /// Every signal found on the line is applied; at most one render request
    /// is emitted.
    pub fn update(&mut self, line: &str) {
        self.lines_seen += 1;

        // Keep an infinite bar alive until structured signals show up.
        let mut render = self.total.is_unknown()
            && self.config.refresh_every > 0
            && self.lines_seen % self.config.refresh_every == 0;
        let mut forced = false;
        let mut display = None;

        let signals = classify(line);
        trace!(line, ?signals, "Classified line");

        for signal in signals {
            match signal {
                Signal::Discovery { count, total } => {
                    if self.rebase(count, total) {
                        render = true;
                        forced = true;
                    }
                }
                Signal::Registration { resource } => self.register(resource),
                Signal::Start {
                    canonical: Some(canonical),
                    ..
                } => {
                    display = Some(canonical);
                    render = true;
                    forced = true;
                }
                Signal::Completion {
                    canonical: Some(canonical),
                    ..
                } => self.complete(&canonical),
                Signal::Prefetch => {
                    render = true;
                    forced = true;
                }
                Signal::Start { canonical: None, .. }
                | Signal::Completion { canonical: None, .. }
                | Signal::Unmatched => {}
            }
        }

        if render {
            let request = RenderRequest {
                message: format_message(display.as_deref().unwrap_or(line), self.config.width),
                done: self.lines_done,
                total: self.total,
                forced,
            };
            self.renderer.show(&request);
        }
    }

    /// Feed every line of `reader` to [`update`](Self::update).
    ///
    /// Lines that are not valid UTF-8 are decoded lossily. Returns the number
    /// of lines read.
    pub fn consume<B: BufRead>(&mut self, mut reader: B) -> Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.update(&String::from_utf8_lossy(&buf));
            count += 1;
        }
        debug!("Consumed {} lines", count);
        Ok(count)
    }

    /// Print a line above the bar.
    pub fn print(&mut self, line: &str) {
        self.renderer.print(line);
    }

    /// Print an error line above the bar.
    pub fn print_error(&mut self, line: &str) {
        self.print(line);
    }

    /// Emit the final render request and release the renderer.
    ///
    /// The renderer is handed back so callers can inspect it.
    pub fn close(mut self) -> R {
        let done = match self.total {
            Total::Known(total) => total,
            Total::Unknown => self.lines_done + 1,
        };
        debug!(
            lines_seen = self.lines_seen,
            lines_done = self.lines_done,
            total = %self.total,
            "Closing progress tracker"
        );
        self.renderer.show(&RenderRequest {
            message: format_message(DONE_MESSAGE, self.config.width),
            done,
            total: self.total,
            forced: true,
        });
        self.renderer.close();
        self.renderer
    }

    /// Align the counters with a `count of total` position reported by Puppet.
    ///
    /// `lines_done` never moves backwards and never exceeds `total`. Returns
    /// `true` if anything changed.
    fn rebase(&mut self, count: u64, total: u64) -> bool {
        let lines_done = count.saturating_sub(1).max(self.lines_done);
        let total = Total::Known(total.max(lines_done));
        if lines_done == self.lines_done && total == self.total {
            return false;
        }
        debug!("Rebasing progress from {}/{} to {}/{}", self.lines_done, self.total, lines_done, total);
        self.lines_done = lines_done;
        self.total = total;
        true
    }

    fn register(&mut self, resource: String) {
        self.total = match self.total {
            Total::Unknown => Total::Known(1),
            Total::Known(total) => Total::Known(total + 1),
        };
        debug!("Monitoring {}, expecting {} resources", resource, self.total);
        self.pending_resources.insert(resource);
    }

    fn complete(&mut self, resource: &str) {
        let Total::Known(total) = self.total else {
            return;
        };
        if self.lines_done < total && self.pending_resources.remove(resource) {
            self.lines_done += 1;
            debug!("Evaluated {} ({}/{})", resource, self.lines_done, total);
        }
    }
}

/// Strip line breaks and pad or truncate `line` to exactly `width` characters.
fn format_message(line: &str, width: usize) -> String {
    line.chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .chain(std::iter::repeat(' '))
        .take(width)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_pads() {
        assert_eq!(format_message("Done", 8), "Done    ");
    }

    #[test]
    fn test_format_message_truncates() {
        assert_eq!(format_message("Service[httpd]", 7), "Service");
    }

    #[test]
    fn test_format_message_strips_line_breaks() {
        assert_eq!(format_message("a\r\nb\n", 4), "ab  ");
    }

    #[test]
    fn test_format_message_counts_characters() {
        assert_eq!(format_message("Fïlé[ä]", 3), "Fïl");
    }
}
