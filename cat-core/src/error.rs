//! Error types and result handling for copy and transform pipelines.

use std::fmt;
use std::io;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a single pipeline run.
#[derive(Debug)]
pub enum Error {
    /// The source failed mid-stream. Only the current input is affected.
    Read(io::Error),

    /// The sink rejected a write. No further output is possible.
    Write(io::Error),

    /// The sink stopped accepting bytes before a block was complete.
    ShortWrite {
        /// Size of the block being written
        requested: usize,
        /// Bytes of the block the sink took before stopping
        written: usize,
    },
}

impl Error {
    /// Returns `true` when the error concerns the sink and the whole run must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Write(_) | Error::ShortWrite { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(err) => write!(f, "read error: {err}"),
            Error::Write(err) => write!(f, "write error: {err}"),
            Error::ShortWrite { requested, written } => write!(
                f,
                "write error: sink accepted {written} of {requested} bytes",
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(err) | Error::Write(err) => Some(err),
            Error::ShortWrite { .. } => None,
        }
    }
}
