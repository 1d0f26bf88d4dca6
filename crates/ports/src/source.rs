// crates/ports/src/source.rs
use std::io;

use neko_shared_kernel::InputSource;

/// Line-at-a-time reader over one opened source.
pub trait LineReader {
    /// Read the next line into `buf` (cleared first) without its terminator.
    ///
    /// Returns `Ok(false)` once the source is exhausted.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool>;
}

impl<R: LineReader + ?Sized> LineReader for Box<R> {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        (**self).read_line(buf)
    }
}

/// Port for opening the sources named on the command line.
pub trait SourceOpener {
    fn open(&self, source: &InputSource) -> io::Result<Box<dyn LineReader>>;
}
