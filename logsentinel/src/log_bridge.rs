use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use logsentinel_core::Status;

use crate::current;

/// `log` facade backend routing records through the current sentinel.
///
/// Error, warn and info records go through the runtime gate.
/// Debug and trace records go through the debug gate and print as INFO.
pub struct SentinelLogger;

impl Log for SentinelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let sentinel = current();
        match metadata.level() {
            Level::Debug | Level::Trace => sentinel.debug_enabled(),
            _ => sentinel.runtime_enabled(),
        }
    }

    fn log(&self, record: &Record) {
        let message = record.args().to_string();
        let sentinel = current();
        match record.level() {
            Level::Debug | Level::Trace => sentinel.debug_log(Status::Info, &message, false),
            level => sentinel.runtime_log(Status::from(level), &message, false),
        }
    }

    fn flush(&self) {
        current().flush();
    }
}

/// Installs [`SentinelLogger`] as the `log` crate's logger.
///
/// Fails if another logger was already installed.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(SentinelLogger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryWriter, clear_local, sentinel_config};

    fn record(logger: &SentinelLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn test_levels_map_to_gates() {
        let capture = MemoryWriter::new();
        sentinel_config().with_writer(capture.clone()).init_local();
        let logger = SentinelLogger;
        record(&logger, Level::Error, "error");
        record(&logger, Level::Warn, "warn");
        record(&logger, Level::Info, "info");
        record(&logger, Level::Debug, "debug");
        record(&logger, Level::Trace, "trace");
        assert_eq!(capture.stdout(), "[WARNING] warn\n[INFO] info\n");
        assert_eq!(capture.stderr(), "[ERROR] error\n");

        crate::toggle_debug_logs();
        crate::toggle_runtime_logs();
        capture.clear();
        record(&logger, Level::Info, "info");
        record(&logger, Level::Debug, "debug");
        record(&logger, Level::Trace, "trace");
        assert_eq!(capture.stdout(), "[INFO] debug\n[INFO] trace\n");
        clear_local();
    }

    #[test]
    fn test_enabled_follows_toggles() {
        let sentinel = sentinel_config()
            .with_writer(MemoryWriter::new())
            .init_local();
        let logger = SentinelLogger;
        let meta = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&meta(Level::Error)));
        assert!(!logger.enabled(&meta(Level::Debug)));
        sentinel.toggle_debug_logs();
        sentinel.toggle_runtime_logs();
        assert!(!logger.enabled(&meta(Level::Info)));
        assert!(logger.enabled(&meta(Level::Trace)));
        clear_local();
    }
}
