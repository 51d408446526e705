use logsentinel::{MemoryWriter, clear_local, init_log_bridge, sentinel_config};

// Single test: the `log` logger can only be installed once per process.
#[test]
fn test_log_macros_route_through_sentinel() {
    init_log_bridge().unwrap();
    assert!(init_log_bridge().is_err());

    let capture = MemoryWriter::new();
    sentinel_config().with_writer(capture.clone()).init_local();
    log::info!("Hello, {}!", "world");
    log::warn!("careful");
    log::error!("boom");
    log::debug!("hidden");
    assert_eq!(capture.stdout(), "[INFO] Hello, world!\n[WARNING] careful\n");
    assert_eq!(capture.stderr(), "[ERROR] boom\n");

    logsentinel::toggle_debug_logs();
    log::debug!("shown");
    log::trace!("traced");
    log::info!("");
    assert_eq!(
        capture.stdout(),
        "[INFO] Hello, world!\n[WARNING] careful\n[INFO] shown\n[INFO] traced\n"
    );
    clear_local();
}
