//! Tests for the progress module functionality.
//!
//! This file contains tests for progress bar styling, configuration,
//! and the terminal renderer.

use kafo::progress::{
    BarRenderer, ProgressBarOpts, RecordingRenderer, RenderRequest, Renderer, StyleOptions, Total,
};
use kafo::{Error, ProgressTrackerBuilder};
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_style_options_default() {
    let style = StyleOptions::default();
    assert_style_options_enabled(&style);
    assert_eq!(style.refresh_interval(), StyleOptions::DEFAULT_REFRESH_INTERVAL);
    assert!(!style.finite().clear());
}

#[test]
fn test_style_options_disabled() {
    let style = create_disabled_style_options();
    assert_style_options_disabled(&style);
}

#[test]
fn test_style_options_setters() {
    let mut style = create_disabled_style_options();
    style.set_infinite(ProgressBarOpts::spinner());
    style.set_refresh_interval(Duration::from_secs(1));

    assert_style_options_enabled(&style);
    assert_eq!(style.refresh_interval(), Duration::from_secs(1));

    style.set_finite(ProgressBarOpts::installing());
    assert!(style.finite().to_bar_style().is_ok());
}

#[test]
fn test_default_templates_are_valid() {
    assert!(ProgressBarOpts::installing().to_bar_style().is_ok());
    assert!(ProgressBarOpts::spinner().to_spinner_style().is_ok());
    assert!(ProgressBarOpts::default().to_bar_style().is_ok());
}

#[test]
fn test_custom_progress_opts() {
    let opts = create_custom_progress_opts("{msg} {pos}/{len} [{bar:20}]", "#>-");
    assert!(opts.to_bar_style().is_ok());
}

#[test]
fn test_invalid_progress_chars_are_rejected() {
    let empty = ProgressBarOpts::new(Some("{bar}".into()), Some("".into()), true, false);
    assert!(matches!(empty.to_bar_style(), Err(Error::InvalidProgressChars(_))));

    let single = create_custom_progress_opts("{bar}", "#");
    assert!(matches!(single.to_spinner_style(), Err(Error::InvalidProgressChars(_))));

    let uneven = create_custom_progress_opts("{bar}", "#中");
    assert!(uneven.to_bar_style().is_err());

    let options = StyleOptions::new(empty, ProgressBarOpts::spinner());
    assert!(BarRenderer::new(options.clone()).is_err());
    assert!(ProgressTrackerBuilder::new()
        .style_options(options)
        .build()
        .is_err());
}

#[test]
fn test_bar_renderer_honours_each_bar_flag() {
    let mut renderer =
        BarRenderer::new(StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::spinner()))
            .unwrap();
    assert!(renderer.active_options().is_enabled());

    renderer.show(&RenderRequest {
        message: padded("Service[httpd]"),
        done: 1,
        total: Total::Known(2),
        forced: true,
    });
    assert!(!renderer.active_options().is_enabled());
    assert!(renderer.bar().is_hidden());
}

#[test]
fn test_progress_bar_opts_set_clear() {
    let mut opts = ProgressBarOpts::installing();
    assert!(!opts.clear());
    opts.set_clear(true);
    assert!(opts.clear());
}

#[test]
fn test_bar_renderer_hidden() {
    let renderer = BarRenderer::new(create_disabled_style_options()).unwrap();
    assert!(renderer.bar().is_hidden());
    assert!(!renderer.is_finite());
}

#[test]
fn test_bar_renderer_follows_requests() {
    let mut renderer = BarRenderer::new(create_disabled_style_options()).unwrap();
    renderer.show(&RenderRequest {
        message: padded("Service[httpd]"),
        done: 4,
        total: Total::Known(8),
        forced: true,
    });

    assert!(renderer.is_finite());
    assert_eq!(renderer.bar().length(), Some(8));
    assert_eq!(renderer.bar().position(), 4);

    renderer.close();
    assert!(renderer.bar().is_finished());
}

#[test]
fn test_hidden_tracker_draws_to_hidden_bar() {
    let mut tracker = ProgressTrackerBuilder::hidden().build().unwrap();
    tracker.update(MONITOR_FOO);
    tracker.update(START_FOO);
    tracker.update(END_FOO);

    let renderer = tracker.close();
    assert!(renderer.bar().is_hidden());
    assert!(renderer.bar().is_finished());
    assert_eq!(renderer.bar().length(), Some(1));
    assert_eq!(renderer.bar().position(), 1);
}

#[test]
fn test_boxed_renderer() {
    let renderer: Box<dyn Renderer> = Box::new(RecordingRenderer::new());
    let mut tracker = ProgressTrackerBuilder::new().build_with(renderer);
    tracker.update(PREFETCH_LINE);
    tracker.close();
}

#[test]
fn test_recording_renderer() {
    let mut renderer = RecordingRenderer::new();
    let request = RenderRequest {
        message: padded("Done"),
        done: 1,
        total: Total::Unknown,
        forced: true,
    };
    renderer.show(&request);
    renderer.print("hello");
    renderer.close();

    assert_eq!(renderer.requests(), &[request]);
    assert_eq!(renderer.printed(), &["hello".to_string()]);
    assert!(renderer.is_closed());
}

#[test]
fn test_total_display() {
    assert_eq!(Total::Unknown.to_string(), "unknown");
    assert_eq!(Total::Known(7).to_string(), "7");
    assert_eq!(Total::Known(7).known(), Some(7));
    assert!(Total::default().is_unknown());
}
