use std::sync::Arc;

use logsentinel::{MemoryWriter, sentinel_config};

// Single test: the process-wide sentinel is shared by every test in this binary.
#[test]
fn test_global_sentinel() {
    let initial = logsentinel::current();
    assert!(!initial.debug_enabled());
    assert!(initial.runtime_enabled());

    let capture = MemoryWriter::new();
    let installed = sentinel_config().with_writer(capture.clone()).init_global();
    assert!(Arc::ptr_eq(&installed, &logsentinel::current()));
    assert!(!Arc::ptr_eq(&initial, &installed));

    logsentinel::info("main");
    std::thread::spawn(|| {
        logsentinel::toggle_debug_logs();
        logsentinel::debug_warn("spawned");
    })
    .join()
    .unwrap();
    assert!(logsentinel::debug_logs_enabled());
    assert_eq!(capture.stdout(), "[INFO] main\n[WARNING] spawned\n");

    let local = MemoryWriter::new();
    sentinel_config().with_writer(local.clone()).init_local();
    logsentinel::error("local");
    assert_eq!(local.stderr(), "[ERROR] local\n");
    assert_eq!(capture.stderr(), "");

    logsentinel::clear_local();
    logsentinel::error("global");
    assert_eq!(capture.stderr(), "[ERROR] global\n");
}
