//! Command line argument parsing for the cat utility.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};

use cat_cli::{CliConfig, DisplayOptions, Error};

const HELP: &str = "\
Usage: cat [OPTION]... [FILE]...
Concatenate FILE(s) to standard output.

With no FILE, or when FILE is -, read standard input.

  -A, --show-all           equivalent to -vET
  -b, --number-nonblank    number nonempty output lines, overrides -n
  -e                       equivalent to -vE
  -E, --show-ends          display $ at end of each line
  -n, --number             number all output lines
  -s, --squeeze-blank      suppress repeated empty output lines
  -t                       equivalent to -vT
  -T, --show-tabs          display TAB characters as ^I
  -u                       (ignored)
  -v, --show-nonprinting   use ^ and M- notation, except for LFD and TAB
      --help     display this help and exit
      --version  output version information and exit

Examples:
  cat f - g  Output f's contents, then standard input, then g's contents.
  cat        Copy standard input to standard output.
";

/// Concatenate files to standard output
#[derive(Debug, Parser)]
#[command(
    name = "cat",
    version,
    about = "Concatenate FILE(s) to standard output",
    override_help = HELP,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct CatOpts {
    /// Files to concatenate; `-` is standard input
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Equivalent to -vET
    #[arg(short = 'A', long = "show-all")]
    show_all: bool,

    /// Number nonempty output lines, overrides -n
    #[arg(short = 'b', long = "number-nonblank")]
    number_nonblank: bool,

    /// Equivalent to -vE
    #[arg(short = 'e')]
    nonprinting_ends: bool,

    /// Display $ at end of each line
    #[arg(short = 'E', long = "show-ends")]
    show_ends: bool,

    /// Number all output lines
    #[arg(short = 'n', long = "number")]
    number: bool,

    /// Suppress repeated empty output lines
    #[arg(short = 's', long = "squeeze-blank")]
    squeeze_blank: bool,

    /// Equivalent to -vT
    #[arg(short = 't')]
    nonprinting_tabs: bool,

    /// Display TAB characters as ^I
    #[arg(short = 'T', long = "show-tabs")]
    show_tabs: bool,

    /// Ignored
    #[allow(dead_code)]
    #[arg(short = 'u')]
    unbuffered: bool,

    /// Use ^ and M- notation, except for LFD and TAB
    #[arg(short = 'v', long = "show-nonprinting")]
    show_nonprinting: bool,

    /// Display this help and exit
    #[allow(dead_code)]
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Output version information and exit
    #[allow(dead_code)]
    #[arg(long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    /// Concatenate the inputs
    Run(CatOpts),
    /// Help or version text to print on stdout before exiting successfully
    Info(String),
    /// The command line was invalid
    Invalid(Error),
}

impl CatOpts {
    /// Parse command line arguments from the process environment
    pub fn parse_env() -> Invocation {
        Self::invocation_from(std::env::args_os())
    }

    /// Parse command line arguments from an iterator
    pub fn invocation_from<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(opts) => Invocation::Run(opts),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Invocation::Info(err.render().to_string())
                }
                _ => Invocation::Invalid(usage_error(&err)),
            },
        }
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        let show_nonprinting =
            self.show_nonprinting || self.show_all || self.nonprinting_ends || self.nonprinting_tabs;
        let show_ends = self.show_ends || self.show_all || self.nonprinting_ends;
        let show_tabs = self.show_tabs || self.show_all || self.nonprinting_tabs;

        CliConfig {
            display: DisplayOptions::default()
                .with_number(self.number)
                .with_number_nonblank(self.number_nonblank)
                .with_squeeze_blank(self.squeeze_blank)
                .with_show_nonprinting(show_nonprinting)
                .with_show_ends(show_ends)
                .with_show_tabs(show_tabs),
        }
    }

    /// Files supplied on the command line
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Turns a clap parse failure into the classic `cat` wording.
fn usage_error(err: &clap::Error) -> Error {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    };

    match (err.kind(), invalid_arg) {
        (ErrorKind::TooManyValues, Some(arg)) => {
            if let Some(name) = long_name(arg) {
                return Error::UnexpectedArgument(name.to_string());
            }
        }
        (ErrorKind::UnknownArgument, Some(arg)) => {
            if let Some((name, _)) = arg.split_once('=') {
                if is_long_flag(name) {
                    return Error::UnexpectedArgument(name.to_string());
                }
            }
            return Error::unknown_option(arg);
        }
        _ => {}
    }

    let rendered = err.render().to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    Error::Usage(
        first_line
            .trim_start_matches("error: ")
            .trim()
            .to_string(),
    )
}

/// Picks `--name` out of clap's rendering of an argument, e.g. `-n, --number`.
fn long_name(arg: &str) -> Option<&str> {
    arg.split(|c: char| c == ',' || c.is_whitespace())
        .find(|part| part.starts_with("--"))
        .map(|part| part.split_once('=').map_or(part, |(name, _)| name))
}

fn is_long_flag(name: &str) -> bool {
    let Some(name) = name.strip_prefix("--") else {
        return false;
    };
    CatOpts::command()
        .get_arguments()
        .any(|arg| arg.get_long() == Some(name))
}
