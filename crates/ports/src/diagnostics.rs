// crates/ports/src/diagnostics.rs
use neko_shared_kernel::SourceError;

/// Receives per-source failures as they happen.
pub trait DiagnosticSink {
    fn report(&self, error: &SourceError);
}
