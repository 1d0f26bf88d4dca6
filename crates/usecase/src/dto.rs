// crates/usecase/src/dto.rs
use neko_shared_kernel::SourceError;

/// What draining one source produced.
///
/// A read failure does not discard the lines already written: they are
/// counted here and the failure is carried alongside.
#[derive(Debug, Default)]
pub struct StreamSummary {
    pub lines: u64,
    pub blank_lines: u64,
    pub failure: Option<SourceError>,
}

/// Outcome of a whole run over every requested source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Sources attempted, failed ones included.
    pub sources: usize,
    /// Sources that failed to open or failed mid-read.
    pub failed: usize,
    /// Lines written across all sources.
    pub lines: u64,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
