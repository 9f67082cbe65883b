//! Progress module containing progress bar functionality.
//!
//! This module provides the rendering side of installation progress. The
//! [`tracker`](crate::tracker) decides *what* to show and emits
//! [`RenderRequest`]s; the types here decide *how* it is shown.
//!
//! # Overview
//!
//! - `render` - The [`Renderer`] contract and an in-memory [`RecordingRenderer`]
//! - `style` - Progress bar styling options and templates
//! - `display` - [`BarRenderer`], the indicatif-based terminal renderer
//!
//! # Examples
//!
//! ## Headless Tracking
//!
//! ```rust
//! use kafo::progress::{RecordingRenderer, Total};
//! use kafo::tracker::ProgressTrackerBuilder;
//!
//! let mut tracker = ProgressTrackerBuilder::new().build_with(RecordingRenderer::new());
//! tracker.update("Info: /Stage[main]/Foo/Bar[baz]: Starting to evaluate the resource (1 of 4)");
//! let renderer = tracker.close();
//! assert_eq!(renderer.requests().last().unwrap().total, Total::Known(4));
//! ```

pub(crate) mod display;
pub(crate) mod render;
pub(crate) mod style;

pub use display::BarRenderer;
pub use render::{RecordingRenderer, RenderRequest, Renderer, Total};
pub use style::{ProgressBarOpts, StyleOptions};
