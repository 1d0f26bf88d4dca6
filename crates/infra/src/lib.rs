// crates/infra/src/lib.rs
pub mod diagnostics;
pub mod input;
pub mod logging;
pub mod output;

pub use diagnostics::StderrDiagnostics;
pub use input::{BoundedLineReader, DEFAULT_MAX_LINE_BYTES, FsSourceOpener, LineTooLong};
pub use output::StdoutSink;
