// crates/domain/src/session.rs
use neko_shared_kernel::LineNumber;

/// Counters for one input source. A fresh session is created per source,
/// so numbering restarts at 1 for every file.
#[derive(Debug, Default, Clone)]
pub struct StreamSession {
    line_number: LineNumber,
    blank_lines: LineNumber,
}

/// Snapshot of the session counters taken right after a line was read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinePosition {
    /// 1-based index of the line within its source.
    pub line_number: LineNumber,
    /// Zero-length lines seen so far, this one included.
    pub blank_lines: LineNumber,
}

impl LinePosition {
    pub const fn new(line_number: LineNumber, blank_lines: LineNumber) -> Self {
        Self { line_number, blank_lines }
    }

    /// Position among non-blank lines.
    pub fn nonblank_index(&self) -> LineNumber {
        self.line_number - self.blank_lines
    }
}

impl StreamSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `line` and return the post-increment counters.
    pub fn advance(&mut self, line: &[u8]) -> LinePosition {
        self.line_number.increment();
        if line.is_empty() {
            self.blank_lines.increment();
        }
        LinePosition::new(self.line_number, self.blank_lines)
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn blank_lines(&self) -> LineNumber {
        self.blank_lines
    }
}
