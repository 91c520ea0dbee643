//! Logger configuration
//!
//! Sources, applied in order:
//! - YAML file (user-level or explicit path)
//! - Environment variables (`TINTLOG_LEVEL`, `TINTLOG_FILE`, `TINTLOG_FILE_COLORS`)

mod env;
mod file;

pub use env::{FILE_COLORS_VAR, FILE_VAR, LEVEL_VAR};
pub use file::LogConfig;
