//! Process-wide logger
//!
//! One [`LoggerHandle`] per process, installed by the first successful call
//! to [`setup`] (or one of its variants). Later calls are no-ops and get the
//! already-installed handle back. Concurrent callers block until the winning
//! initialization finishes and all observe its outcome, including a failed
//! file open.
//!
//! The free functions and the `debugf!`-style macros forward to the
//! installed handle and do nothing before setup.
//!
//! ```no_run
//! use tintlog_core::logging::global;
//! use tintlog_core::{infof, Severity};
//!
//! global::setup_or_exit(Severity::Debug, "app.log");
//! global::info("main", "booted");
//! infof!("main", "{} workers", 4);
//! global::close();
//! ```

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::config::LogConfig;

use super::error::LogResult;
use super::handle::LoggerHandle;
use super::level::Severity;

static GLOBAL: OnceCell<LogResult<LoggerHandle>> = OnceCell::new();

fn install_with<F>(init: F) -> LogResult<&'static LoggerHandle>
where
    F: FnOnce() -> LogResult<LoggerHandle>,
{
    GLOBAL.get_or_init(init).as_ref().map_err(Clone::clone)
}

/// Configure the process-wide logger.
///
/// Runs at most once per process. An empty `file_path` means console only.
/// A file that cannot be opened is reported to this caller and every later
/// one; the logger stays uninstalled.
pub fn setup(level: Severity, file_path: impl Into<PathBuf>) -> LogResult<&'static LoggerHandle> {
    let path = file_path.into();
    install_with(move || LoggerHandle::new(level, path))
}

/// Configure the process-wide logger from loaded configuration
pub fn setup_with(config: &LogConfig) -> LogResult<&'static LoggerHandle> {
    install_with(|| LoggerHandle::from_config(config))
}

/// Install an already-built handle as the process-wide logger.
///
/// If a logger is already installed, `handle` is dropped and the existing
/// one is returned.
pub fn install(handle: LoggerHandle) -> LogResult<&'static LoggerHandle> {
    install_with(move || Ok(handle))
}

/// Like [`setup`], but a failed file open terminates the process.
///
/// The error goes to stderr and the exit status is 1.
pub fn setup_or_exit(level: Severity, file_path: impl Into<PathBuf>) -> &'static LoggerHandle {
    match setup(level, file_path) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// The installed logger, if setup succeeded
pub fn global() -> Option<&'static LoggerHandle> {
    GLOBAL.get().and_then(|result| result.as_ref().ok())
}

pub fn log(severity: Severity, module: &str, message: &str) {
    if let Some(logger) = global() {
        logger.log(severity, module, message);
    }
}

pub fn logf(severity: Severity, module: &str, args: fmt::Arguments<'_>) {
    if let Some(logger) = global() {
        logger.logf(severity, module, args);
    }
}

/// Log a debug message
pub fn debug(module: &str, message: &str) {
    log(Severity::Debug, module, message);
}

/// Log an info message
pub fn info(module: &str, message: &str) {
    log(Severity::Info, module, message);
}

/// Log a warning message
pub fn warn(module: &str, message: &str) {
    log(Severity::Warn, module, message);
}

/// Log an error message
pub fn error(module: &str, message: &str) {
    log(Severity::Error, module, message);
}

pub fn debugf(module: &str, args: fmt::Arguments<'_>) {
    logf(Severity::Debug, module, args);
}

pub fn infof(module: &str, args: fmt::Arguments<'_>) {
    logf(Severity::Info, module, args);
}

pub fn warnf(module: &str, args: fmt::Arguments<'_>) {
    logf(Severity::Warn, module, args);
}

pub fn errorf(module: &str, args: fmt::Arguments<'_>) {
    logf(Severity::Error, module, args);
}

/// Change the process-wide threshold
pub fn set_level(level: Severity) {
    if let Some(logger) = global() {
        logger.set_level(level);
    }
}

/// Release the process-wide log file, if any
pub fn close() {
    if let Some(logger) = global() {
        logger.close();
    }
}

/// Formatted debug record through the process-wide logger
#[macro_export]
macro_rules! debugf {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::global::debugf($module, format_args!($($arg)*))
    };
}

/// Formatted info record through the process-wide logger
#[macro_export]
macro_rules! infof {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::global::infof($module, format_args!($($arg)*))
    };
}

/// Formatted warning record through the process-wide logger
#[macro_export]
macro_rules! warnf {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::global::warnf($module, format_args!($($arg)*))
    };
}

/// Formatted error record through the process-wide logger
#[macro_export]
macro_rules! errorf {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::global::errorf($module, format_args!($($arg)*))
    };
}
