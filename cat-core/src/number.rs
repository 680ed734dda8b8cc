//! Line number field rendered directly as ASCII.
//!
//! The counter never converts an integer to text. It keeps the decimal digits
//! in a fixed field and increments them in place, so numbering a line costs a
//! few byte comparisons no matter how many lines came before.

/// Number of digit cells in the default field.
pub const DEFAULT_DIGITS: usize = 18;

/// Minimum printed width of the number, not counting the trailing tab.
pub const MIN_PRINT_WIDTH: usize = 6;

/// Marker written into the leading cell once the field has no room left.
pub const OVERFLOW_MARKER: u8 = b'>';

/// Right-justified decimal line counter followed by a TAB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumber {
    /// Digit cells plus the trailing `\t`.
    cells: Box<[u8]>,
    /// Leftmost digit in use.
    start: usize,
    /// Where the printed field begins; never right of the minimum width.
    print: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::with_digits(DEFAULT_DIGITS)
    }
}

impl LineNumber {
    /// Creates a counter with the default 18-digit field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter whose field holds `digits` digits before overflowing.
    ///
    /// `digits` is raised to 1 if zero.
    pub fn with_digits(digits: usize) -> Self {
        let digits = digits.max(1);
        let mut cells = vec![b' '; digits + 1];
        cells[digits - 1] = b'0';
        cells[digits] = b'\t';

        Self {
            cells: cells.into_boxed_slice(),
            start: digits - 1,
            print: digits - MIN_PRINT_WIDTH.min(digits),
        }
    }

    /// Advances to the next line number and returns the rendered field.
    ///
    /// The field is the number right-justified to at least six columns and
    /// followed by a tab, e.g. `"     1\t"`.
    pub fn next(&mut self) -> &[u8] {
        let last = self.digits() - 1;
        let mut pos = last;
        loop {
            if self.cells[pos] < b'9' {
                self.cells[pos] += 1;
                return self.field();
            }
            self.cells[pos] = b'0';
            if pos == self.start {
                break;
            }
            pos -= 1;
        }

        // Carry fell off the leftmost digit in use.
        if self.start > 0 {
            self.start -= 1;
            self.cells[self.start] = b'1';
        } else {
            self.cells[0] = OVERFLOW_MARKER;
        }
        self.print = self.print.min(self.start);
        self.field()
    }

    /// Returns the field for the current value without advancing.
    pub fn field(&self) -> &[u8] {
        &self.cells[self.print..]
    }

    /// Returns `true` once the counter ran out of digits.
    pub fn overflowed(&self) -> bool {
        self.cells[0] == OVERFLOW_MARKER
    }

    fn digits(&self) -> usize {
        self.cells.len() - 1
    }
}
