//! Concatenate files to standard output
//!
//! Reads every FILE in order, or standard input when none is given or a
//! FILE is `-`, and writes the contents to standard output. Display options
//! can number lines, squeeze blank runs, mark line ends and make tabs and
//! non-printing bytes visible.

use std::process;

mod opts;

use opts::{CatOpts, Invocation};

use cat_cli::{format_error_for_stderr, init_tracing, run_cli, PROGRAM};

fn main() {
    init_tracing();

    let opts = match CatOpts::parse_env() {
        Invocation::Run(opts) => opts,
        Invocation::Info(text) => {
            print!("{text}");
            process::exit(0);
        }
        Invocation::Invalid(err) => {
            eprintln!("{}", format_error_for_stderr(PROGRAM, &err));
            process::exit(1);
        }
    };

    let config = opts.config();
    if !run_cli(opts.files(), &config) {
        process::exit(1);
    }
}
