//! Environment variable overrides for logger configuration

use std::env;
use std::path::PathBuf;

use crate::logging::{LogError, LogResult};

use super::file::LogConfig;

/// Minimum severity name (`DEBUG`, `INFO`, `WARN`, `ERROR`, `NONE`)
pub const LEVEL_VAR: &str = "TINTLOG_LEVEL";

/// Log file path; set but empty means console only
pub const FILE_VAR: &str = "TINTLOG_FILE";

/// `1`/`true` keeps colors in the file, `0`/`false` strips them
pub const FILE_COLORS_VAR: &str = "TINTLOG_FILE_COLORS";

impl LogConfig {
    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> LogResult<()> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> LogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_VAR) {
            self.level = level.parse()?;
        }

        if let Some(file) = lookup(FILE_VAR) {
            self.file = if file.is_empty() {
                None
            } else {
                Some(PathBuf::from(file))
            };
        }

        if let Some(colors) = lookup(FILE_COLORS_VAR) {
            self.file_colors = parse_bool(&colors).ok_or_else(|| {
                LogError::Config(format!("{} must be a boolean, got {:?}", FILE_COLORS_VAR, colors))
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
