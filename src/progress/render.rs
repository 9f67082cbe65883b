//! The contract between the tracker and whatever draws the progress bar.
//!
//! The tracker produces [`RenderRequest`]s; a [`Renderer`] turns them into
//! terminal output (see [`BarRenderer`](crate::progress::BarRenderer)) or
//! simply keeps them (see [`RecordingRenderer`]).

use std::fmt;

/// Expected number of resources in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Total {
    /// No structured signal has been seen yet.
    #[default]
    Unknown,
    /// The number of resources Puppet is going to evaluate.
    Known(u64),
}

impl Total {
    /// Return the total if it is known.
    pub fn known(&self) -> Option<u64> {
        match self {
            Total::Known(total) => Some(*total),
            Total::Unknown => None,
        }
    }

    /// Return `true` while no total has been established.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Total::Unknown)
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Unknown => write!(f, "unknown"),
            Total::Known(total) => write!(f, "{total}"),
        }
    }
}

/// A request to redraw the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Fixed-width text to display next to the bar.
    pub message: String,
    /// Number of completed resources.
    pub done: u64,
    /// Expected number of resources.
    pub total: Total,
    /// Bypass the renderer's redraw throttling.
    pub forced: bool,
}

/// Something able to draw the progress of a Puppet run.
pub trait Renderer {
    /// Draw the given state. Non-forced requests may be dropped.
    fn show(&mut self, request: &RenderRequest);

    /// Print a line of text without corrupting the bar.
    fn print(&mut self, line: &str);

    /// Release the output. Called exactly once, after the final request.
    fn close(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn show(&mut self, request: &RenderRequest) {
        (**self).show(request)
    }

    fn print(&mut self, line: &str) {
        (**self).print(line)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// A renderer that draws nothing and remembers everything it was asked.
///
/// Useful to run the tracker headless, or to inspect what it emitted.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    requests: Vec<RenderRequest>,
    printed: Vec<String>,
    closed: bool,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> &[RenderRequest] {
        &self.requests
    }

    /// Lines passed to [`Renderer::print`].
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// Whether [`Renderer::close`] was called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Renderer for RecordingRenderer {
    fn show(&mut self, request: &RenderRequest) {
        self.requests.push(request.clone());
    }

    fn print(&mut self, line: &str) {
        self.printed.push(line.to_string());
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
