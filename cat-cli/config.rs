//! Configuration types and constants for cat CLI operations.

use cat_core::DisplayOptions;

/// Program name used as the prefix of every diagnostic
pub const PROGRAM: &str = "cat";

/// Input name that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Environment variable holding the `tracing` filter for diagnostics
pub const LOG_ENV: &str = "CAT_LOG";

/// Configuration for CLI operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// How lines are rendered
    pub display: DisplayOptions,
}

impl CliConfig {
    /// Returns `true` when inputs can be copied without looking at lines.
    pub fn is_plain(&self) -> bool {
        self.display.is_plain()
    }
}
