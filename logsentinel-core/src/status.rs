use std::{fmt, str::FromStr};

use log::Level;
use thiserror::Error;

/// Status tag printed in front of every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Printed to stderr.
    Error,
    Info,
    Warning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Error, Status::Info, Status::Warning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Error => "ERROR",
            Status::Info => "INFO",
            Status::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for a status value the gate does not recognize, or text that does not name a status.
///
/// The message doubles as the warning line the gate prints when it falls back to INFO.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized status \"{0}\"! setting default status \"INFO\"")]
pub struct UnrecognizedStatus(pub String);

impl FromStr for Status {
    type Err = UnrecognizedStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Status::Error),
            "INFO" => Ok(Status::Info),
            "WARNING" => Ok(Status::Warning),
            other => Err(UnrecognizedStatus(other.into())),
        }
    }
}

/// Anything the gate accepts where a status is expected, valid or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg<'a> {
    Known(Status),
    Unrecognized(&'a str),
}

impl StatusArg<'_> {
    /// Validates the argument, falling back to INFO.
    pub fn resolve(self) -> Result<Status, UnrecognizedStatus> {
        match self {
            StatusArg::Known(status) => Ok(status),
            StatusArg::Unrecognized(raw) => Err(UnrecognizedStatus(raw.into())),
        }
    }
}

impl From<Status> for StatusArg<'_> {
    fn from(status: Status) -> Self {
        StatusArg::Known(status)
    }
}

/// Text is never a status, even when it spells one. Use `str::parse` to get a [`Status`].
impl<'a> From<&'a str> for StatusArg<'a> {
    fn from(raw: &'a str) -> Self {
        StatusArg::Unrecognized(raw)
    }
}

impl From<Status> for Level {
    fn from(status: Status) -> Self {
        match status {
            Status::Error => Level::Error,
            Status::Warning => Level::Warn,
            Status::Info => Level::Info,
        }
    }
}

impl From<Level> for Status {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Status::Error,
            Level::Warn => Status::Warning,
            Level::Info | Level::Debug | Level::Trace => Status::Info,
        }
    }
}
