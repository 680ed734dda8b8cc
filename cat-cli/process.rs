//! High-level input processing and CLI orchestration.

use std::io;

use cat_core::{copy, transform, BlockSizes, RunState, StreamSummary};
use tracing::{debug, warn};

use crate::config::{CliConfig, PROGRAM, STDIN_PATH};
use crate::error::{format_error_for_stderr, Error, Result};
use crate::io::{open_input, open_stdout, Output};

/// Processes a single input according to the CLI configuration.
///
/// This is the per-input step of the dispatcher:
///
/// 1. Opens the input file (or stdin for `-`)
/// 2. Picks block sizes from the input and output handles
/// 3. Copies verbatim when no display option is set, otherwise runs the
///    line transformer with the shared `state`
/// 4. Closes the input, whatever the outcome
///
/// # Parameters
///
/// * `input_path` - Path to the input file, or `-` to read from stdin
/// * `config` - CLI configuration holding the display options
/// * `state` - Line counter and blank-line state carried across inputs
/// * `output` - Destination shared by all inputs
///
/// # Returns
///
/// A [`StreamSummary`] with the bytes read and written for this input.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - Input file cannot be opened ([`Error::OpenInput`])
/// - Input cannot be read ([`Error::ReadInput`])
/// - Standard output rejects a write ([`Error::WriteOutput`], [`Error::ShortWrite`])
pub fn process_file<W: io::Write>(
    input_path: &str,
    config: &CliConfig,
    state: &mut RunState,
    output: &mut Output<W>,
) -> Result<StreamSummary> {
    let input = open_input(input_path)?;
    let sizes = BlockSizes::from_native(input.native_block_size(), output.native_block_size());

    debug!(
        input = input_path,
        stdin = input.is_stdin(),
        input_block = sizes.input(),
        read_capacity = sizes.read_capacity(),
        output_block = sizes.output(),
        plain = config.is_plain(),
        "processing input"
    );

    let result = if config.is_plain() {
        copy(input, output.writer(), sizes)
    } else {
        transform(input, output.writer(), &config.display, state, sizes)
    };

    result.map_err(|err| Error::from_pipeline(input_path, err))
}

/// Runs every input in order, reporting failures to `diagnostics`.
///
/// An input that cannot be opened or read is reported and skipped; the
/// remaining inputs are still processed. A failure of the output stops the
/// run immediately. An empty `files` list reads standard input.
///
/// # Parameters
///
/// * `files` - Input paths in command line order; `-` is standard input
/// * `config` - CLI configuration holding the display options
/// * `program` - Program name used to prefix diagnostics
/// * `output` - Destination for all input contents
/// * `diagnostics` - Where error messages go, normally stderr
///
/// # Returns
///
/// Returns `true` only if every input was processed successfully.
pub fn run_inputs<W, E>(
    files: &[String],
    config: &CliConfig,
    program: &str,
    output: &mut Output<W>,
    diagnostics: &mut E,
) -> bool
where
    W: io::Write,
    E: io::Write,
{
    let stdin_only = [STDIN_PATH.to_string()];
    let files = if files.is_empty() {
        &stdin_only[..]
    } else {
        files
    };

    let mut state = RunState::new();
    let mut success = true;

    for file in files {
        match process_file(file, config, &mut state, output) {
            Ok(summary) => debug!(
                input = file.as_str(),
                bytes_read = summary.bytes_read,
                bytes_written = summary.bytes_written,
                expansion = summary.expansion_ratio(),
                "input done"
            ),
            Err(err) => {
                success = false;
                report(program, &err, diagnostics);
                if err.is_fatal() {
                    warn!(input = file.as_str(), "output failed, stopping");
                    break;
                }
            }
        }
    }

    success
}

/// Runs the CLI over `files`, writing to stdout and reporting to stderr.
///
/// # Returns
///
/// Returns `true` only if standard output could be opened and every input
/// was processed successfully.
pub fn run_cli(files: &[String], config: &CliConfig) -> bool {
    let mut diagnostics = io::stderr();
    let mut output = match open_stdout() {
        Ok(output) => output,
        Err(err) => {
            report(PROGRAM, &err, &mut diagnostics);
            return false;
        }
    };

    run_inputs(files, config, PROGRAM, &mut output, &mut diagnostics)
}

fn report<E: io::Write>(program: &str, err: &Error, diagnostics: &mut E) {
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(diagnostics, "{}", format_error_for_stderr(program, err));
}
