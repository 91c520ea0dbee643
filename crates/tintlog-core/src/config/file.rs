//! YAML logger configuration
//!
//! Supports a user-level file (~/.config/tintlog/config.yaml) or any explicit
//! path:
//!
//! ```yaml
//! level: DEBUG
//! file: /var/log/app.log
//! file_colors: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{LogError, LogResult, Severity};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum severity that gets written
    pub level: Severity,

    /// Append-only log file; `None` or empty means console only
    pub file: Option<PathBuf>,

    /// Keep ANSI color escapes in the file
    pub file_colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            file: None,
            file_colors: true,
        }
    }
}

impl LogConfig {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_file_colors(mut self, colors: bool) -> Self {
        self.file_colors = colors;
        self
    }

    /// User-level config path (~/.config/tintlog/config.yaml)
    pub fn user_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("tintlog").join("config.yaml")
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load configuration from a file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load the user-level file, then apply environment overrides
    pub fn load_user() -> LogResult<Self> {
        let mut config = Self::load(Self::user_path())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> LogResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Write the configuration to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
