//! Error types for cat CLI operations.

use std::io;

use thiserror::Error;

/// Formats an error message for stderr.
///
/// Option errors get the `Try '<program> --help'` hint on a second line.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"cat"`).
/// - `err`: The error to report.
pub fn format_error_for_stderr(program: &str, err: &Error) -> String {
    if err.is_usage() {
        format!("{program}: {err}\nTry '{program} --help' for more information.")
    } else {
        format!("{program}: {err}")
    }
}

/// Renders an I/O error the way classic `cat` prints it.
///
/// Drops the ` (os error N)` suffix the standard library appends, leaving
/// the plain `strerror` text, e.g. `No such file or directory`.
pub fn describe_io(err: &io::Error) -> String {
    let message = err.to_string();
    if err.raw_os_error().is_none() {
        return message;
    }
    match message.rfind(" (os error ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}

/// Main error type for cat CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open an input file
    #[error("{path}: {}", describe_io(.source))]
    OpenInput {
        /// Path to the input file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading an input failed mid-stream
    #[error("{path}: {}", describe_io(.source))]
    ReadInput {
        /// Path to the input file, `-` for stdin
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Standard output could not be set up
    #[error("standard output: {}", describe_io(.source))]
    OpenOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing to standard output failed
    #[error("write error: {}", describe_io(.source))]
    WriteOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Standard output stopped accepting bytes part way through a block
    #[error("write error: short write ({written} of {requested} bytes)")]
    ShortWrite {
        /// Bytes handed to the write call
        requested: usize,
        /// Bytes the sink reported as written
        written: usize,
    },

    /// Unknown short option
    #[error("invalid option -- '{0}'")]
    InvalidOption(char),

    /// Unknown long option
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// Long option given a value it does not take
    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedArgument(String),

    /// Any other command line problem
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Maps a pipeline error for the input at `path`.
    pub fn from_pipeline(path: &str, err: cat_core::Error) -> Self {
        match err {
            cat_core::Error::Read(source) => Error::ReadInput {
                path: path.to_string(),
                source,
            },
            cat_core::Error::Write(source) => Error::WriteOutput { source },
            cat_core::Error::ShortWrite { requested, written } => {
                Error::ShortWrite { requested, written }
            }
        }
    }

    /// Returns `true` if no further input can be processed after this error.
    ///
    /// Everything that concerns standard output is fatal; a bad input only
    /// fails itself.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::OpenOutput { .. } | Error::WriteOutput { .. } | Error::ShortWrite { .. }
        )
    }

    /// Returns `true` for command line errors.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::InvalidOption(_)
                | Error::UnrecognizedOption(_)
                | Error::UnexpectedArgument(_)
                | Error::Usage(_)
        )
    }

    /// Builds the error for an option the parser did not recognize.
    ///
    /// `arg` is the offending argument as typed, e.g. `--frobnicate` or `-x`.
    pub fn unknown_option(arg: &str) -> Self {
        if arg.starts_with("--") {
            let name = arg.split_once('=').map_or(arg, |(name, _)| name);
            return Error::UnrecognizedOption(name.to_string());
        }
        match arg.strip_prefix('-').and_then(|rest| rest.chars().next()) {
            Some(option) => Error::InvalidOption(option),
            None => Error::Usage(format!("invalid argument '{arg}'")),
        }
    }
}

/// Specialized `Result` type for cat CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
