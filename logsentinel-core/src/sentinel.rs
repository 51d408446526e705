use std::{
    fmt,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    log_writer::{LogWriter, StdStreams},
    status::{Status, StatusArg},
};

/// Logging gate: two independent toggles in front of a stream writer.
///
/// Runtime logs are enabled and debug logs disabled by default.
/// Toggles are atomics and writes are serialized, so a sentinel can be shared across threads.
pub struct Sentinel {
    debug_enabled: AtomicBool,
    runtime_enabled: AtomicBool,
    writer: Mutex<Box<dyn LogWriter>>,
}

impl Default for Sentinel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentinel")
            .field("debug_enabled", &self.debug_enabled())
            .field("runtime_enabled", &self.runtime_enabled())
            .finish_non_exhaustive()
    }
}

fn write_line(writer: &mut dyn LogWriter, status: Status, message: &str) {
    let line = format!("[{status}] {message}");
    if status == Status::Error {
        writer.err(&line);
    } else {
        writer.out(&line);
    }
}

impl Sentinel {
    /// Sentinel writing to stdout/stderr with default toggles.
    pub fn new() -> Self {
        Self::with_writer(StdStreams)
    }

    pub fn with_writer<W: LogWriter + 'static>(writer: W) -> Self {
        Self::from_boxed(Box::new(writer))
    }

    /// Like [`Sentinel::with_writer`] for a writer that is already boxed.
    pub fn from_boxed(writer: Box<dyn LogWriter>) -> Self {
        Self {
            debug_enabled: AtomicBool::new(false),
            runtime_enabled: AtomicBool::new(true),
            writer: Mutex::new(writer),
        }
    }

    fn writer(&self) -> MutexGuard<'_, Box<dyn LogWriter>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes `[<status>] <message>`, ERROR to stderr and everything else to stdout.
    pub fn log(&self, status: Status, message: &str) {
        let mut writer = self.writer();
        write_line(&mut **writer, status, message);
    }

    /// Validates `status` and emits `message`.
    ///
    /// An unrecognized status never fails: a WARNING line reports it and the message goes out as INFO.
    /// Both lines are written under one lock.
    pub fn resolve_status<'a>(&self, status: impl Into<StatusArg<'a>>, message: &str) {
        match status.into().resolve() {
            Ok(status) => self.log(status, message),
            Err(unrecognized) => {
                let mut writer = self.writer();
                write_line(&mut **writer, Status::Warning, &unrecognized.to_string());
                write_line(&mut **writer, Status::Info, message);
            }
        }
    }

    /// Debug-level entry point. Empty messages are dropped even when bypassing the toggle.
    pub fn debug_log<'a>(
        &self,
        status: impl Into<StatusArg<'a>>,
        message: &str,
        bypass_toggle: bool,
    ) {
        if message.is_empty() {
            return;
        }
        if !bypass_toggle && !self.debug_enabled() {
            return;
        }
        self.resolve_status(status, message);
    }

    /// Runtime-level entry point, gated by the runtime toggle.
    pub fn runtime_log<'a>(
        &self,
        status: impl Into<StatusArg<'a>>,
        message: &str,
        bypass_toggle: bool,
    ) {
        if message.is_empty() {
            return;
        }
        if !bypass_toggle && !self.runtime_enabled() {
            return;
        }
        self.resolve_status(status, message);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Acquire)
    }

    pub fn runtime_enabled(&self) -> bool {
        self.runtime_enabled.load(Ordering::Acquire)
    }

    pub fn set_debug_logs(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Release);
    }

    pub fn set_runtime_logs(&self, enabled: bool) {
        self.runtime_enabled.store(enabled, Ordering::Release);
    }

    /// Flips the debug toggle and returns its new value.
    pub fn toggle_debug_logs(&self) -> bool {
        !self.debug_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Flips the runtime toggle and returns its new value.
    pub fn toggle_runtime_logs(&self) -> bool {
        !self.runtime_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn flush(&self) {
        self.writer().flush();
    }
}
