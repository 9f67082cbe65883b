//! Reporting of answer file problems to the user.
//!
//! Readers receive a [`Reporter`] instead of logging through a global
//! logger, so embedders decide where messages end up.

use tracing::error;

/// Receives user-facing error messages.
pub trait Reporter {
    /// Report an error message.
    fn error(&self, message: &str);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Reports errors through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
