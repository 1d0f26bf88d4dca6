// crates/domain/src/options.rs

/// How line numbers are assigned, after resolving flag precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberingMode {
    #[default]
    Off,
    /// Only non-blank lines get a number; blank lines are skipped in the sequence.
    NonBlank,
    /// Every line gets its 1-based read position.
    All,
}

/// Display options resolved from the command line. Read-only once built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayOptions {
    pub number_nonblank: bool,
    pub number_all: bool,
    pub show_ends: bool,
    pub show_nonprinting: bool,
    pub show_tabs: bool,
}

impl DisplayOptions {
    /// `number_nonblank` overrides `number_all` when both are set.
    pub fn numbering(&self) -> NumberingMode {
        if self.number_nonblank {
            NumberingMode::NonBlank
        } else if self.number_all {
            NumberingMode::All
        } else {
            NumberingMode::Off
        }
    }

    /// True when no stage applies and lines are copied through untouched.
    pub fn is_passthrough(&self) -> bool {
        !(self.number_nonblank || self.number_all || self.show_ends || self.show_nonprinting || self.show_tabs)
    }
}
