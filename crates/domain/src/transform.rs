// crates/domain/src/transform.rs
//! Per-line rewrite pipeline.
//!
//! Stages run in a fixed order over one working buffer: numbering, tab
//! visualization, end marker, non-printing escape. Each later stage sees the
//! output of the earlier ones; the number prefix and `$` are printable, so the
//! escape stage leaves them alone.

pub mod escape;
pub mod numbering;
pub mod tabs;

pub use escape::{convert_non_printing, escape_byte, escape_into};
pub use numbering::{NUMBER_SEPARATOR, NUMBER_WIDTH, numbered_line, pad_left, write_number_prefix};
pub use tabs::{TAB_MARKER, visualize_tabs};

use crate::{
    options::{DisplayOptions, NumberingMode},
    session::LinePosition,
};

/// Appended by the end-marker stage.
pub const END_MARKER: u8 = b'$';

/// Reusable transformer bound to one set of display options.
///
/// Holds a scratch buffer so the tab and escape stages do not allocate per line.
#[derive(Debug, Clone, Default)]
pub struct LineTransformer {
    options: DisplayOptions,
    scratch: Vec<u8>,
}

impl LineTransformer {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options, scratch: Vec::new() }
    }

    /// Render `line` into `out` (cleared first). No trailing newline is added.
    pub fn render_into(&mut self, line: &[u8], position: LinePosition, out: &mut Vec<u8>) {
        out.clear();
        let options = self.options;
        if options.is_passthrough() {
            out.extend_from_slice(line);
            return;
        }

        match options.numbering() {
            NumberingMode::NonBlank if !line.is_empty() => write_number_prefix(out, position.nonblank_index()),
            NumberingMode::All => write_number_prefix(out, position.line_number),
            NumberingMode::NonBlank | NumberingMode::Off => {}
        }
        out.extend_from_slice(line);

        if options.show_tabs {
            self.scratch.clear();
            visualize_tabs(out, &mut self.scratch);
            std::mem::swap(out, &mut self.scratch);
        }

        if options.show_ends {
            out.push(END_MARKER);
        }

        if options.show_nonprinting {
            self.scratch.clear();
            escape_into(out, options.show_tabs, &mut self.scratch);
            std::mem::swap(out, &mut self.scratch);
        }
    }

    pub fn render(&mut self, line: &[u8], position: LinePosition) -> Vec<u8> {
        let mut out = Vec::with_capacity(line.len() + NUMBER_WIDTH + NUMBER_SEPARATOR.len() + 1);
        self.render_into(line, position, &mut out);
        out
    }
}

/// One-shot form of [`LineTransformer::render`].
pub fn transform_line(line: &[u8], position: LinePosition, options: &DisplayOptions) -> Vec<u8> {
    LineTransformer::new(*options).render(line, position)
}
