// crates/infra/src/input/line_reader.rs
use std::io::{self, BufRead};

use memchr::memchr;
use neko_ports::LineReader;
use thiserror::Error;

/// Longest line accepted unless configured otherwise (1 MiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

/// Raised (wrapped in an `io::Error` of kind `InvalidData`) when a line outgrows the limit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("line exceeds {limit} bytes")]
pub struct LineTooLong {
    pub limit: usize,
}

/// Splits a buffered byte stream into lines.
///
/// Lines end at `\n`; one `\r` right before the terminator (or before end of
/// input) is dropped; a last line without terminator is still returned.
/// Line content longer than `max_line_bytes` fails the read.
#[derive(Debug)]
pub struct BoundedLineReader<R> {
    inner: R,
    max_line_bytes: usize,
}

impl<R: BufRead> BoundedLineReader<R> {
    pub fn new(inner: R, max_line_bytes: usize) -> Self {
        Self { inner, max_line_bytes }
    }
}

impl<R: BufRead> LineReader for BoundedLineReader<R> {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let limit = self.max_line_bytes;
        // One byte of slack for a `\r` that turns out to belong to the terminator.
        let growth_limit = limit.saturating_add(1);
        let mut started = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if available.is_empty() {
                if !started {
                    return Ok(false);
                }
                drop_carriage_return(buf);
                ensure_within(buf.len(), limit, limit)?;
                return Ok(true);
            }
            started = true;

            match memchr(b'\n', available) {
                Some(pos) => {
                    ensure_within(buf.len() + pos, growth_limit, limit)?;
                    buf.extend_from_slice(&available[..pos]);
                    self.inner.consume(pos + 1);
                    drop_carriage_return(buf);
                    ensure_within(buf.len(), limit, limit)?;
                    return Ok(true);
                }
                None => {
                    let taken = available.len();
                    ensure_within(buf.len() + taken, growth_limit, limit)?;
                    buf.extend_from_slice(available);
                    self.inner.consume(taken);
                }
            }
        }
    }
}

fn ensure_within(len: usize, allowed: usize, limit: usize) -> io::Result<()> {
    if len > allowed {
        return Err(io::Error::new(io::ErrorKind::InvalidData, LineTooLong { limit }));
    }
    Ok(())
}

fn drop_carriage_return(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
