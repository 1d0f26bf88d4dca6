// crates/shared-kernel/src/value_objects/source.rs
use std::{
    ffi::OsStr,
    fmt,
    path::PathBuf,
};

/// Operand that stands for standard input.
pub const STDIN_OPERAND: &str = "-";

/// One input stream requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a positional operand; `-` means standard input.
    pub fn from_operand(operand: impl AsRef<OsStr>) -> Self {
        let operand = operand.as_ref();
        if operand == STDIN_OPERAND {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(operand))
        }
    }

    /// Name used in diagnostics: `-` for stdin, the path as given otherwise.
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => STDIN_OPERAND.to_string(),
            Self::File(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_OPERAND),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for InputSource {
    fn from(operand: &str) -> Self {
        Self::from_operand(operand)
    }
}

impl From<PathBuf> for InputSource {
    fn from(operand: PathBuf) -> Self {
        Self::from_operand(operand.as_os_str())
    }
}
