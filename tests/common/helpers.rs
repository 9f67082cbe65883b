use kafo::progress::{ProgressBarOpts, RecordingRenderer, RenderRequest, StyleOptions};
use kafo::{ProgressTracker, ProgressTrackerBuilder, Reporter};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

// Common test lines, as printed by `puppet apply --evaltrace` and the installer hook
pub const MONITOR_FOO: &str = "MONITOR_RESOURCE Foo[bar]";
pub const START_FOO: &str = "Stage/main/Foo[bar]: Starting to evaluate the resource";
pub const END_FOO: &str = "Stage/main/Foo[bar]: Evaluated in 0.01 seconds";
pub const PREFETCH_LINE: &str = "Debug: Prefetching yum resources for package";
pub const NOISE_LINE: &str = "Debug: Loading facts";

static TRACING: Once = Once::new();

/// Installs a tracing subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// === Tracker Helpers ===

/// Creates a tracker recording its render requests
pub fn create_recording_tracker() -> ProgressTracker<RecordingRenderer> {
    init_tracing();
    ProgressTrackerBuilder::new().build_with(RecordingRenderer::new())
}

/// Creates a recording tracker with a custom message width
pub fn create_recording_tracker_with_width(width: usize) -> ProgressTracker<RecordingRenderer> {
    init_tracing();
    ProgressTrackerBuilder::new()
        .width(width)
        .build_with(RecordingRenderer::new())
}

/// Builds an evaltrace start line for a resource, with an optional `(N of M)` counter
pub fn start_line(resource: &str, position: Option<(u64, u64)>) -> String {
    match position {
        Some((count, total)) => format!(
            "Info: /Stage[main]/Test/{}: Starting to evaluate the resource ({} of {})",
            resource, count, total
        ),
        None => format!(
            "Info: /Stage[main]/Test/{}: Starting to evaluate the resource",
            resource
        ),
    }
}

/// Builds an evaltrace completion line for a resource
pub fn end_line(resource: &str) -> String {
    format!("Info: /Stage[main]/Test/{}: Evaluated in 0.02 seconds", resource)
}

/// Builds a monitoring line for a resource
pub fn monitor_line(resource: &str) -> String {
    format!("MONITOR_RESOURCE {}", resource)
}

/// Pads a message to the default width of 50 characters
pub fn padded(message: &str) -> String {
    format!("{:<50}", message)
}

// === Renderer Assertions ===

/// Asserts that exactly one request was recorded since `before`, and returns it
pub fn assert_single_request(renderer: &RecordingRenderer, before: usize) -> RenderRequest {
    let requests = &renderer.requests()[before..];
    assert_eq!(requests.len(), 1, "Expected exactly one request, got {:?}", requests);
    requests[0].clone()
}

// === Progress Bar Helpers ===

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false,
    )
}

/// Creates disabled style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
}

/// Asserts that style options are enabled
pub fn assert_style_options_enabled(style: &StyleOptions) {
    assert!(style.is_enabled(), "Style options should be enabled");
}

/// Asserts that style options are disabled
pub fn assert_style_options_disabled(style: &StyleOptions) {
    assert!(!style.is_enabled(), "Style options should be disabled");
}

// === Answer File Helpers ===

/// Collects reported messages instead of logging them
#[derive(Default)]
pub struct CollectingReporter {
    messages: RefCell<Vec<String>>,
}

impl CollectingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Reporter for CollectingReporter {
    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// A typical answer file mixing booleans and parameter hashes
pub const TEST_ANSWERS: &str = r#"
puppet:
  server: true
  server_port: 8140
foreman: true
foreman::plugin::ansible: false
motd: {}
"#;
