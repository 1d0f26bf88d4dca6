// crates/infra/src/input/opener.rs
use std::io;

use neko_ports::{LineReader, SourceOpener};
use neko_shared_kernel::InputSource;

use super::{
    file_reader::FileReader,
    line_reader::{BoundedLineReader, DEFAULT_MAX_LINE_BYTES},
};

/// Opens files from the filesystem and `-` as locked standard input.
#[derive(Debug, Clone, Copy)]
pub struct FsSourceOpener {
    max_line_bytes: usize,
}

impl FsSourceOpener {
    pub fn new(max_line_bytes: usize) -> Self {
        Self { max_line_bytes }
    }
}

impl Default for FsSourceOpener {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_BYTES)
    }
}

impl SourceOpener for FsSourceOpener {
    fn open(&self, source: &InputSource) -> io::Result<Box<dyn LineReader>> {
        match source {
            InputSource::Stdin => Ok(Box::new(BoundedLineReader::new(io::stdin().lock(), self.max_line_bytes))),
            InputSource::File(path) => {
                let reader = FileReader::open_buffered(path)?;
                Ok(Box::new(BoundedLineReader::new(reader, self.max_line_bytes)))
            }
        }
    }
}
