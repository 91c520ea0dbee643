//! Leveled logging to the console and an optional append-only file

mod error;
mod format;
pub mod global;
mod handle;
mod level;
mod noop;
mod sink;
mod traits;

pub use error::{LogError, LogResult};
pub use format::{format_plain_record, format_record, parse_record, timestamp, ParsedRecord, RESET};
pub use handle::{LoggerBuilder, LoggerHandle};
pub use level::Severity;
pub use noop::NoOpLogger;
pub use sink::{CaptureBuffer, ConsoleSink, FileSink};
pub use traits::{Logger, LoggerExt, SharedLogger};

// Re-export the process-wide functions for convenience
pub use global::{
    close, debug, debugf, error, errorf, info, infof, install, set_level, setup, setup_or_exit,
    setup_with, warn, warnf,
};
