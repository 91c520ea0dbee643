//! tintlog core
//!
//! Leveled logging with a module tag and timestamp on every record. Records
//! go to the console with ANSI color framing and, optionally, to one
//! append-only file.
//!
//! ## Owned handle
//!
//! ```rust,no_run
//! use tintlog_core::{log_info, LoggerHandle, Severity};
//!
//! let logger = LoggerHandle::new(Severity::Debug, "app.log")?;
//! logger.info("svc", "hello");
//! log_info!(logger, "svc", "{} connections", 3);
//! logger.set_level(Severity::Error);
//! logger.close();
//! # Ok::<(), tintlog_core::LogError>(())
//! ```
//!
//! ## Process-wide logger
//!
//! ```rust,no_run
//! use tintlog_core::{errorf, logging, Severity};
//!
//! logging::setup_or_exit(Severity::Info, "");
//! logging::warn("db", "slow query");
//! errorf!("db", "connection lost after {}s", 30);
//! ```

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::LogConfig;

pub use logging::{
    parse_record, ConsoleSink, FileSink, LogError, LogResult, Logger, LoggerBuilder, LoggerExt,
    LoggerHandle, NoOpLogger, ParsedRecord, Severity, SharedLogger,
};
