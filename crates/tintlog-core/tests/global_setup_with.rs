//! Process-wide logger configured from a `LogConfig`

use std::fs;

use tintlog_core::logging::{self, global};
use tintlog_core::{parse_record, LogConfig, Severity};

#[test]
fn test_setup_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("configured.log");
    let config = LogConfig::new(Severity::Warn)
        .with_file(&log_path)
        .with_file_colors(false);

    let logger = logging::setup_with(&config).unwrap();
    assert!(std::ptr::eq(logger, global::global().unwrap()));
    assert_eq!(logger.level(), Severity::Warn);
    assert!(logger.has_file());

    logging::info("cfg", "below threshold");
    logging::warn("cfg", "plain line");

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains('\x1b'));
    let record = parse_record(lines[0]).unwrap();
    assert_eq!(record.module, "cfg");
    assert_eq!(record.message, "plain line");

    // A second configuration is ignored
    let other = LogConfig::new(Severity::Debug).with_file(dir.path().join("other.log"));
    let again = logging::setup_with(&other).unwrap();
    assert!(std::ptr::eq(logger, again));
    assert_eq!(logger.level(), Severity::Warn);
    assert!(!dir.path().join("other.log").exists());

    logging::close();
}
