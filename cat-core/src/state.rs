//! State carried from one input to the next within a single run.

use crate::number::LineNumber;

/// Length of the current run of empty lines, saturating at two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankRun {
    /// The last line had content, or nothing has been read yet.
    #[default]
    None,
    /// Exactly one empty line since the last line with content.
    One,
    /// Two or more empty lines in a row.
    Many,
}

impl BlankRun {
    /// Counts one more empty line.
    #[must_use]
    pub fn bump(self) -> Self {
        match self {
            BlankRun::None => BlankRun::One,
            BlankRun::One | BlankRun::Many => BlankRun::Many,
        }
    }
}

/// Line counter and line-boundary state shared by every input of a run.
///
/// Numbering continues across files, a blank run at the end of one file
/// merges with one at the start of the next, and a file that ends without
/// a newline leaves the next file's first bytes on the same line.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub(crate) line_number: LineNumber,
    pub(crate) blank_run: BlankRun,
    pub(crate) mid_line: bool,
}

impl RunState {
    /// Creates the state for a fresh run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates run state with a custom line number counter.
    pub fn with_line_number(line_number: LineNumber) -> Self {
        Self {
            line_number,
            ..Self::default()
        }
    }

    /// Current value of the line counter.
    pub fn line_number(&self) -> &LineNumber {
        &self.line_number
    }

    /// Current blank-line run length.
    pub fn blank_run(&self) -> BlankRun {
        self.blank_run
    }

    /// Returns `true` if the last input ended in the middle of a line.
    pub fn is_mid_line(&self) -> bool {
        self.mid_line
    }
}
