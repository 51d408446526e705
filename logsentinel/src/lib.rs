//! # logsentinel
//! Status-tagged logging to stdout/stderr behind two toggles: runtime logs and debug logs.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! logsentinel = "0.1.0"
//! ```
//!
//! ```rust
//! logsentinel::info("Hello, world!"); // [INFO] Hello, world!
//! logsentinel::error("Something broke"); // [ERROR] Something broke, on stderr
//! logsentinel::debug_info("not printed, debug logs are off by default");
//!
//! logsentinel::toggle_debug_logs();
//! logsentinel::debug_warn("now it is"); // [WARNING] now it is
//!
//! logsentinel::toggle_runtime_logs();
//! logsentinel::bypass().info("printed even with runtime logs off");
//! ```
//!
//! ## Capturing output
//! A sentinel installed for the current thread takes precedence over the global one.
//!
//! ```rust
//! use logsentinel::{MemoryWriter, sentinel_config};
//!
//! let capture = MemoryWriter::new();
//! sentinel_config()
//!     .with_writer(capture.clone())
//!     .init_local();
//!
//! logsentinel::warn("careful");
//! logsentinel::error("boom");
//! assert_eq!(capture.stdout(), "[WARNING] careful\n");
//! assert_eq!(capture.stderr(), "[ERROR] boom\n");
//! ```
//!
//! ## Holding a sentinel explicitly
//! ```rust
//! use logsentinel::{MemoryWriter, Status, sentinel_config};
//!
//! let capture = MemoryWriter::new();
//! let sentinel = sentinel_config()
//!     .with_debug_logs(true)
//!     .with_writer(capture.clone())
//!     .build();
//! sentinel.debug_log(Status::Info, "hello", false);
//! sentinel.runtime_log("FOO", "hello", false);
//! assert_eq!(
//!     capture.stdout(),
//!     "[INFO] hello\n[WARNING] Unrecognized status \"FOO\"! setting default status \"INFO\"\n[INFO] hello\n"
//! );
//! ```

mod log_bridge;

use std::{
    cell::RefCell,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

pub use log_bridge::{SentinelLogger, init_log_bridge};
pub use logsentinel_core::{
    LogWriter, MemoryWriter, Sentinel, Status, StatusArg, StdStreams, UnrecognizedStatus,
};

/// Process-wide sentinel, used by every thread without a local one.
static GLOBAL_SENTINEL: LazyLock<RwLock<Arc<Sentinel>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Sentinel::new())));

thread_local! {
    /// Thread-local sentinel overriding the global one.
    static LOCAL_SENTINEL: RefCell<Option<Arc<Sentinel>>> = const { RefCell::new(None) };
}

/// Returns the sentinel facade calls on this thread resolve to.
pub fn current() -> Arc<Sentinel> {
    let local = LOCAL_SENTINEL
        .try_with(|local| local.borrow().clone())
        .ok()
        .flatten();
    match local {
        Some(sentinel) => sentinel,
        None => Arc::clone(&GLOBAL_SENTINEL.read().unwrap_or_else(PoisonError::into_inner)),
    }
}

/// Removes the sentinel installed for the current thread, if any.
pub fn clear_local() -> Option<Arc<Sentinel>> {
    LOCAL_SENTINEL.with(|local| local.borrow_mut().take())
}

/// Builder for configuring and installing a sentinel.
pub struct ConfigBuilder {
    debug_logs: bool,
    runtime_logs: bool,
    writer: Box<dyn LogWriter>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            debug_logs: false,
            runtime_logs: true,
            writer: Box::new(StdStreams),
        }
    }
}

impl ConfigBuilder {
    /// Sets the initial state of the debug toggle.
    pub fn with_debug_logs(self, enabled: bool) -> Self {
        Self {
            debug_logs: enabled,
            ..self
        }
    }
    /// Sets the initial state of the runtime toggle.
    pub fn with_runtime_logs(self, enabled: bool) -> Self {
        Self {
            runtime_logs: enabled,
            ..self
        }
    }
    /// Sets where lines are written.
    pub fn with_writer<W: LogWriter + 'static>(self, writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            ..self
        }
    }
    /// Builds a standalone sentinel.
    pub fn build(self) -> Sentinel {
        let Self {
            debug_logs,
            runtime_logs,
            writer,
        } = self;
        let sentinel = Sentinel::from_boxed(writer);
        sentinel.set_debug_logs(debug_logs);
        sentinel.set_runtime_logs(runtime_logs);
        sentinel
    }
    /// Replaces the process-wide sentinel.
    pub fn init_global(self) -> Arc<Sentinel> {
        let sentinel = Arc::new(self.build());
        *GLOBAL_SENTINEL
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&sentinel);
        sentinel
    }
    /// Installs the sentinel for the current thread only.
    pub fn init_local(self) -> Arc<Sentinel> {
        let sentinel = Arc::new(self.build());
        LOCAL_SENTINEL.with(|local| {
            *local.borrow_mut() = Some(Arc::clone(&sentinel));
        });
        sentinel
    }
}

/// Returns a default ConfigBuilder: debug logs off, runtime logs on, standard streams.
pub fn sentinel_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

/// Log an INFO message at runtime level.
pub fn info(message: &str) {
    current().runtime_log(Status::Info, message, false);
}

/// Log a WARNING message at runtime level.
pub fn warn(message: &str) {
    current().runtime_log(Status::Warning, message, false);
}

/// Log an ERROR message at runtime level (stderr).
pub fn error(message: &str) {
    current().runtime_log(Status::Error, message, false);
}

/// Log an INFO message at debug level.
pub fn debug_info(message: &str) {
    current().debug_log(Status::Info, message, false);
}

/// Log a WARNING message at debug level.
pub fn debug_warn(message: &str) {
    current().debug_log(Status::Warning, message, false);
}

/// Log an ERROR message at debug level (stderr).
pub fn debug_error(message: &str) {
    current().debug_log(Status::Error, message, false);
}

/// Wrappers that ignore the runtime and debug toggles. Empty messages are still dropped.
#[derive(Debug, Clone, Copy)]
pub struct Bypass;

/// Returns the toggle-bypassing wrappers.
pub fn bypass() -> Bypass {
    Bypass
}

impl Bypass {
    pub fn info(&self, message: &str) {
        current().runtime_log(Status::Info, message, true);
    }
    pub fn warn(&self, message: &str) {
        current().runtime_log(Status::Warning, message, true);
    }
    pub fn error(&self, message: &str) {
        current().runtime_log(Status::Error, message, true);
    }
    pub fn debug_info(&self, message: &str) {
        current().debug_log(Status::Info, message, true);
    }
    pub fn debug_warn(&self, message: &str) {
        current().debug_log(Status::Warning, message, true);
    }
    pub fn debug_error(&self, message: &str) {
        current().debug_log(Status::Error, message, true);
    }
}

/// Flips the debug toggle and returns its new value.
pub fn toggle_debug_logs() -> bool {
    current().toggle_debug_logs()
}

/// Flips the runtime toggle and returns its new value.
pub fn toggle_runtime_logs() -> bool {
    current().toggle_runtime_logs()
}

pub fn debug_logs_enabled() -> bool {
    current().debug_enabled()
}

pub fn runtime_logs_enabled() -> bool {
    current().runtime_enabled()
}
