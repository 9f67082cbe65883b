//! Configuration structures and defaults for the progress tracker.

use crate::StyleOptions;

/// Configuration structure for the tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Width of the message shown next to the bar, in characters.
    pub width: usize,
    /// While the total is unknown, redraw every `refresh_every` lines.
    pub refresh_every: u64,
    /// Style options for the terminal renderer.
    pub style_options: StyleOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            width: 50,
            refresh_every: 20,
            style_options: StyleOptions::default(),
        }
    }
}
