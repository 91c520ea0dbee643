//! No-op logger implementation

use super::level::Severity;
use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _severity: Severity, _module: &str, _message: &str) {}

    fn enabled(&self, _severity: Severity) -> bool {
        false
    }
}
