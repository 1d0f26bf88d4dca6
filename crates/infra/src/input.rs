// crates/infra/src/input.rs
pub mod file_reader;
pub mod line_reader;
pub mod opener;

pub use file_reader::FileReader;
pub use line_reader::{BoundedLineReader, DEFAULT_MAX_LINE_BYTES, LineTooLong};
pub use opener::FsSourceOpener;
