//! Shared functionality for the `cat` command-line tool.
//!
//! This crate sits between the argument parser in `bin/cat` and the
//! streaming engine in `cat-core`. It resolves inputs to readable handles,
//! sets up standard output, runs every input through the right pipeline and
//! turns failures into `cat: ...` diagnostics and an overall exit status.

mod config;
mod error;
mod io;
mod logging;
mod process;


pub use config::{CliConfig, LOG_ENV, PROGRAM, STDIN_PATH};
pub use error::{describe_io, format_error_for_stderr, Error, Result};
pub use io::{native_block_size, open_input, open_stdout, Input, Output};
pub use logging::init_tracing;
pub use process::{process_file, run_cli, run_inputs};

pub use cat_core::DisplayOptions;
