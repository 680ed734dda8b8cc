//! Display options controlling how lines are rendered.

/// Resolved set of per-line transformations for one run.
///
/// Built once from the command line and never mutated while inputs are
/// processed. All flags default to `false`, which selects a plain copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayOptions {
    number: bool,
    number_nonblank: bool,
    squeeze_blank: bool,
    show_nonprinting: bool,
    show_tabs: bool,
    show_ends: bool,
}

impl DisplayOptions {
    /// Numbers every output line.
    #[must_use]
    pub fn with_number(mut self, enabled: bool) -> Self {
        self.number = enabled;
        self
    }

    /// Numbers non-empty output lines only.
    ///
    /// Takes precedence over [`with_number`](Self::with_number) for blank lines.
    #[must_use]
    pub fn with_number_nonblank(mut self, enabled: bool) -> Self {
        self.number_nonblank = enabled;
        self
    }

    /// Collapses runs of empty lines into a single empty line.
    #[must_use]
    pub fn with_squeeze_blank(mut self, enabled: bool) -> Self {
        self.squeeze_blank = enabled;
        self
    }

    /// Renders control and high bytes in `^X` / `M-X` notation.
    #[must_use]
    pub fn with_show_nonprinting(mut self, enabled: bool) -> Self {
        self.show_nonprinting = enabled;
        self
    }

    /// Renders TAB as `^I`.
    #[must_use]
    pub fn with_show_tabs(mut self, enabled: bool) -> Self {
        self.show_tabs = enabled;
        self
    }

    /// Appends `$` to every line.
    #[must_use]
    pub fn with_show_ends(mut self, enabled: bool) -> Self {
        self.show_ends = enabled;
        self
    }

    /// Whether any line gets a number at all.
    pub fn numbers_lines(&self) -> bool {
        self.number || self.number_nonblank
    }

    /// Whether an empty line gets a number.
    pub fn numbers_blank_lines(&self) -> bool {
        self.number && !self.number_nonblank
    }

    /// Returns `true` if blank-line squeezing is active.
    pub fn squeeze_blank(&self) -> bool {
        self.squeeze_blank
    }

    /// Returns `true` if `^`/`M-` notation is active.
    pub fn show_nonprinting(&self) -> bool {
        self.show_nonprinting
    }

    /// Returns `true` if tabs are rendered as `^I`.
    pub fn show_tabs(&self) -> bool {
        self.show_tabs
    }

    /// Returns `true` if lines end with `$`.
    pub fn show_ends(&self) -> bool {
        self.show_ends
    }

    /// Whether line bytes must go through the escaper instead of a verbatim copy.
    pub fn escapes_bytes(&self) -> bool {
        self.show_nonprinting || self.show_tabs
    }

    /// Returns `true` when no option is set and input can be copied byte for byte.
    pub fn is_plain(&self) -> bool {
        !(self.numbers_lines()
            || self.squeeze_blank
            || self.show_nonprinting
            || self.show_tabs
            || self.show_ends)
    }
}
