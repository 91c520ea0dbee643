//! A failed process-wide setup is reported to every caller

use std::sync::{Arc, Barrier};
use std::thread;

use tintlog_core::logging::{self, global};
use tintlog_core::{LogError, Severity};

#[test]
fn test_failed_setup_is_shared_and_final() {
    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("missing-dir").join("app.log");

    let callers = 8;
    let barrier = Arc::new(Barrier::new(callers));
    let handles: Vec<_> = (0..callers)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let path = bad_path.clone();
            thread::spawn(move || {
                barrier.wait();
                logging::setup(Severity::Info, path).map(|_| ())
            })
        })
        .collect();

    for handle in handles {
        match handle.join().unwrap() {
            Err(LogError::FileOpen { path, .. }) => assert_eq!(path, bad_path),
            other => panic!("expected FileOpen, got {other:?}"),
        }
    }

    assert!(global::global().is_none());

    // Initialization ran once; a later call sees the same failure
    let later = logging::setup(Severity::Info, "");
    assert!(matches!(later, Err(LogError::FileOpen { .. })));

    // Emission stays a harmless no-op
    logging::error("svc", "nowhere to go");
    logging::close();
}
