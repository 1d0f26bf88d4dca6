// crates/infra/src/output.rs
use std::io::{self, BufWriter, StdoutLock};

/// Output buffer; flushed per source and at the end of the run.
pub const OUTPUT_BUFFER_BYTES: usize = 64 * 1024;

/// Buffered, locked standard output.
pub type StdoutSink = BufWriter<StdoutLock<'static>>;

/// Create the single writer used for all line output.
pub fn stdout_sink() -> StdoutSink {
    BufWriter::with_capacity(OUTPUT_BUFFER_BYTES, io::stdout().lock())
}
