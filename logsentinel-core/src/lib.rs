//! # logsentinel-core
//! Core types for logsentinel - status tags, stream writers and the logging gate.

mod log_writer;
mod sentinel;
mod status;

pub use log_writer::{LogWriter, MemoryWriter, StdStreams};
pub use sentinel::Sentinel;
pub use status::{Status, StatusArg, UnrecognizedStatus};
