// crates/usecase/src/stream.rs
use std::io::Write;

use neko_domain::{DisplayOptions, LineTransformer, StreamSession};
use neko_ports::LineReader;
use neko_shared_kernel::{Result, SourceError};

use crate::dto::StreamSummary;

/// Runs one source at a time through the line transformer.
///
/// Buffers are kept between sources; counters are not.
#[derive(Debug)]
pub struct StreamDriver {
    transformer: LineTransformer,
    line: Vec<u8>,
    rendered: Vec<u8>,
}

impl StreamDriver {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            transformer: LineTransformer::new(options),
            line: Vec::new(),
            rendered: Vec::new(),
        }
    }

    /// Read `reader` to its end, writing each transformed line plus `\n` to `sink`.
    ///
    /// A read failure stops this source and is returned inside the summary.
    /// A write failure is fatal and returned as `Err`.
    pub fn drain(&mut self, reader: &mut dyn LineReader, name: &str, sink: &mut dyn Write) -> Result<StreamSummary> {
        let mut session = StreamSession::new();
        let mut summary = StreamSummary::default();

        loop {
            match reader.read_line(&mut self.line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    summary.failure = Some(SourceError::read(name, err));
                    break;
                }
            }

            let position = session.advance(&self.line);
            self.transformer.render_into(&self.line, position, &mut self.rendered);
            self.rendered.push(b'\n');
            sink.write_all(&self.rendered)?;
        }

        summary.lines = session.line_number().value();
        summary.blank_lines = session.blank_lines().value();
        Ok(summary)
    }
}
