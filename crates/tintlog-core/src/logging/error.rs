//! Errors raised while configuring the logger

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while setting up or configuring the logger.
///
/// Emission itself never fails; these only come out of setup and config
/// loading. The type is `Clone` so the global facade can report one failed
/// initialization to every caller that raced on it.
#[derive(Error, Debug, Clone)]
pub enum LogError {
    #[error("error opening log file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[source] Arc<io::Error>),
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::Io(Arc::new(err))
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message_names_path() {
        let err = LogError::FileOpen {
            path: PathBuf::from("/nope/app.log"),
            source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/app.log"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_clone_shares_source() {
        let err: LogError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        let copy = err.clone();
        assert_eq!(err.to_string(), copy.to_string());
    }
}
