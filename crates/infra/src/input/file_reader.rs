use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

/// Read buffer used for files; large enough that typical lines arrive in one fill.
pub const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(|file| BufReader::with_capacity(READ_BUFFER_BYTES, file))
    }
}
