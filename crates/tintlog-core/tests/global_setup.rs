//! Process-wide logger lifecycle
//!
//! Everything touching the global logger lives in one test so the steps run
//! in order within this test binary's process.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use tintlog_core::logging::{self, global};
use tintlog_core::{debugf, errorf, infof, parse_record, Severity};

#[test]
fn test_global_lifecycle() {
    // Before setup every call is a silent no-op
    assert!(global::global().is_none());
    logging::info("early", "dropped");
    infof!("early", "dropped {}", 1);
    logging::set_level(Severity::Debug);
    logging::close();

    let dir = tempfile::tempdir().unwrap();

    // Racing setups: exactly one wins, everyone sees the same logger
    let callers = 16;
    let barrier = Arc::new(Barrier::new(callers));
    let handles: Vec<_> = (0..callers)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let path = dir.path().join(format!("out-{i}.log"));
            thread::spawn(move || {
                barrier.wait();
                let logger = logging::setup(Severity::Debug, path).unwrap();
                logger as *const _ as usize
            })
        })
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));

    let created: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(created.len(), 1, "only the winning setup opens a file");
    let log_path = created[0].as_ref().unwrap().path();

    let logger = global::global().expect("installed");
    assert!(logger.has_file());
    assert_eq!(logger.level(), Severity::Debug);

    // Later setups are no-ops, even with other arguments
    let again = logging::setup(Severity::None, "").unwrap();
    assert!(std::ptr::eq(again, logger));
    assert_eq!(logger.level(), Severity::Debug);

    logging::info("svc", "hello");
    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    let record = parse_record(lines[0]).unwrap();
    assert_eq!(record.severity, Some(Severity::Info));
    assert_eq!(record.module, "svc");
    assert_eq!(record.message, "hello");

    // 100 concurrent records land as 100 whole lines
    let writers: Vec<_> = (0..100)
        .map(|i| thread::spawn(move || debugf!("worker", "record {i}")))
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }
    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 101);
    assert!(lines.iter().all(|line| parse_record(line).is_some()));

    // Threshold changes apply to later calls
    logging::set_level(Severity::Error);
    logging::warn("svc", "suppressed");
    errorf!("svc", "kept {}", 1);
    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 102);
    assert!(!content.contains("suppressed"));
    assert!(content.contains("kept 1"));

    // After close the file stops growing and calls still succeed
    logging::close();
    assert!(!logger.has_file());
    logging::error("svc", "console only");
    logging::close();
    assert_eq!(fs::read_to_string(&log_path).unwrap().lines().count(), 102);
}
