//! Logger trait definition

use std::fmt;
use std::sync::Arc;

use super::format::render_args;
use super::level::Severity;

/// Logging surface that components depend on
///
/// Implementations:
/// - `LoggerHandle`: the console + file logger
/// - `NoOpLogger`: silent logger for testing
///
/// Only `log` is required; the per-severity helpers forward to it.
pub trait Logger: Send + Sync {
    /// Emit `message` for `module` at `severity`
    fn log(&self, severity: Severity, module: &str, message: &str);

    /// Whether a record at `severity` would be emitted.
    ///
    /// Formatted helpers check this before rendering their arguments.
    fn enabled(&self, severity: Severity) -> bool {
        severity != Severity::None
    }

    /// Log a debug message
    fn debug(&self, module: &str, message: &str) {
        self.log(Severity::Debug, module, message);
    }

    /// Log an info message
    fn info(&self, module: &str, message: &str) {
        self.log(Severity::Info, module, message);
    }

    /// Log a warning message
    fn warn(&self, module: &str, message: &str) {
        self.log(Severity::Warn, module, message);
    }

    /// Log an error message
    fn error(&self, module: &str, message: &str) {
        self.log(Severity::Error, module, message);
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log with format arguments, rendering them only if the severity passes
    fn log_fmt(&self, severity: Severity, module: &str, args: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            self.log(severity, module, &render_args(args));
        }
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Debug, module, args);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Info, module, args);
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Warn, module, args);
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Error, module, args);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Log through any `Logger` with format arguments
///
/// ```
/// use tintlog_core::{log_info, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// log_info!(logger, "svc", "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $module:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.debug_fmt($module, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $module:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.info_fmt($module, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $module:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.warn_fmt($module, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $module:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.error_fmt($module, format_args!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingLogger {
        threshold: Option<Severity>,
        entries: Mutex<Vec<(Severity, String, String)>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, severity: Severity, module: &str, message: &str) {
            self.entries
                .lock()
                .push((severity, module.to_string(), message.to_string()));
        }

        fn enabled(&self, severity: Severity) -> bool {
            match self.threshold {
                Some(threshold) => severity.allows(threshold),
                None => true,
            }
        }
    }

    struct Counted<'a>(&'a AtomicUsize);

    impl fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_default_methods_forward_severity() {
        let logger = RecordingLogger::default();
        logger.debug("a", "d");
        logger.info("b", "i");
        logger.warn("c", "w");
        logger.error("d", "e");

        let entries = logger.entries.lock();
        let severities: Vec<_> = entries.iter().map(|e| e.0).collect();
        assert_eq!(
            severities,
            vec![Severity::Debug, Severity::Info, Severity::Warn, Severity::Error]
        );
        assert_eq!(entries[0].1, "a");
        assert_eq!(entries[3].2, "e");
    }

    #[test]
    fn test_fmt_helpers_render() {
        let logger = RecordingLogger::default();
        log_warn!(logger, "disk", "{}% used", 93);

        let entries = logger.entries.lock();
        assert_eq!(
            entries[0],
            (Severity::Warn, "disk".to_string(), "93% used".to_string())
        );
    }

    #[test]
    fn test_fmt_skips_rendering_when_filtered() {
        let calls = AtomicUsize::new(0);
        let logger = RecordingLogger {
            threshold: Some(Severity::Error),
            ..Default::default()
        };

        logger.info_fmt("svc", format_args!("{}", Counted(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(logger.entries.lock().is_empty());

        logger.error_fmt("svc", format_args!("{}", Counted(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_shared_logger_object() {
        let logger: SharedLogger = Arc::new(RecordingLogger::default());
        logger.info("svc", "through a trait object");
        log_error!(logger, "svc", "code {}", 7);
    }
}
