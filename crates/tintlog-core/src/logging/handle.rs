//! The console + file logger
//!
//! `LoggerHandle` is an owned, cheaply clonable handle. Build one with
//! [`LoggerHandle::new`] or [`LoggerHandle::builder`] and pass it to the
//! components that log, or install it process-wide through
//! [`crate::logging::global::setup`].

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::config::LogConfig;

use super::error::LogResult;
use super::format::{format_plain_record, format_record, render_args, timestamp};
use super::level::Severity;
use super::sink::{ConsoleSink, FileSink};
use super::traits::Logger;

struct Inner {
    min_severity: AtomicU8,
    console: ConsoleSink,
    file: Option<FileSink>,
}

/// Handle to a configured logger
///
/// Clones share the same threshold, console and file.
///
/// # Example
///
/// ```no_run
/// use tintlog_core::{LoggerHandle, Severity};
///
/// let logger = LoggerHandle::new(Severity::Info, "app.log")?;
/// logger.info("svc", "started");
/// logger.warnf("svc", format_args!("{} retries left", 2));
/// logger.close();
/// # Ok::<(), tintlog_core::LogError>(())
/// ```
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<Inner>,
}

impl LoggerHandle {
    /// Create a logger with a threshold and an optional file path.
    ///
    /// An empty path means console only. Otherwise the file is opened for
    /// appending and created if missing.
    pub fn new(level: Severity, file_path: impl Into<PathBuf>) -> LogResult<Self> {
        let path = file_path.into();
        let mut builder = Self::builder().level(level);
        if !path.as_os_str().is_empty() {
            builder = builder.file(path);
        }
        builder.build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Create a logger from loaded configuration
    pub fn from_config(config: &LogConfig) -> LogResult<Self> {
        let mut builder = Self::builder()
            .level(config.level)
            .file_colors(config.file_colors);
        if let Some(path) = config.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            builder = builder.file(path.clone());
        }
        builder.build()
    }

    fn from_parts(level: Severity, console: ConsoleSink, file: Option<FileSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                min_severity: AtomicU8::new(level as u8),
                console,
                file,
            }),
        }
    }

    /// Current threshold
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.inner.min_severity.load(Ordering::Acquire))
    }

    /// Change the threshold for all subsequent records
    pub fn set_level(&self, level: Severity) {
        self.inner.min_severity.store(level as u8, Ordering::Release);
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.allows(self.level())
    }

    /// Whether a file sink is configured and still open
    pub fn has_file(&self) -> bool {
        self.inner.file.as_ref().is_some_and(FileSink::is_open)
    }

    /// Release the file sink. The console keeps working.
    pub fn close(&self) {
        if let Some(file) = &self.inner.file {
            file.close();
        }
    }

    /// Emit a plain message at `severity`
    pub fn log(&self, severity: Severity, module: &str, message: &str) {
        if !self.is_enabled(severity) {
            return;
        }
        self.emit(severity, module, message);
    }

    /// Emit a formatted message at `severity`.
    ///
    /// The arguments are only rendered if the severity passes.
    pub fn logf(&self, severity: Severity, module: &str, args: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }
        self.emit(severity, module, &render_args(args));
    }

    fn emit(&self, severity: Severity, module: &str, message: &str) {
        let timestamp = timestamp();
        let record = format_record(severity, module, &timestamp, message);

        self.inner.console.write_record(&record);
        if let Some(file) = &self.inner.file {
            if file.colors() {
                file.write_record(&record);
            } else {
                file.write_record(&format_plain_record(module, &timestamp, message));
            }
        }
    }

    pub fn debug(&self, module: &str, message: &str) {
        self.log(Severity::Debug, module, message);
    }

    pub fn info(&self, module: &str, message: &str) {
        self.log(Severity::Info, module, message);
    }

    pub fn warn(&self, module: &str, message: &str) {
        self.log(Severity::Warn, module, message);
    }

    pub fn error(&self, module: &str, message: &str) {
        self.log(Severity::Error, module, message);
    }

    pub fn debugf(&self, module: &str, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, module, args);
    }

    pub fn infof(&self, module: &str, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, module, args);
    }

    pub fn warnf(&self, module: &str, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warn, module, args);
    }

    pub fn errorf(&self, module: &str, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, module, args);
    }
}

impl Logger for LoggerHandle {
    fn log(&self, severity: Severity, module: &str, message: &str) {
        LoggerHandle::log(self, severity, module, message);
    }

    fn enabled(&self, severity: Severity) -> bool {
        self.is_enabled(severity)
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("level", &self.level())
            .field("console", &self.inner.console)
            .field("file", &self.inner.file)
            .finish()
    }
}

/// Builder for [`LoggerHandle`]
#[derive(Default)]
pub struct LoggerBuilder {
    level: Severity,
    file: Option<PathBuf>,
    file_colors: Option<bool>,
    console: Option<ConsoleSink>,
}

impl LoggerBuilder {
    /// Minimum severity (default `Info`)
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Append records to this file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Keep ANSI escapes in the file (default `true`)
    pub fn file_colors(mut self, colors: bool) -> Self {
        self.file_colors = Some(colors);
        self
    }

    /// Replace stdout with another console sink
    pub fn console(mut self, console: ConsoleSink) -> Self {
        self.console = Some(console);
        self
    }

    /// Open the file sink, if any, and build the handle
    pub fn build(self) -> LogResult<LoggerHandle> {
        let file = match self.file {
            Some(path) => Some(FileSink::open(path, self.file_colors.unwrap_or(true))?),
            None => None,
        };
        let console = self.console.unwrap_or_default();
        Ok(LoggerHandle::from_parts(self.level, console, file))
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("level", &self.level)
            .field("file", &self.file)
            .field("file_colors", &self.file_colors)
            .finish()
    }
}
