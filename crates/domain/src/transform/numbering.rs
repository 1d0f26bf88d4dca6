// crates/domain/src/transform/numbering.rs
use neko_shared_kernel::LineNumber;

/// Minimum width of the number field. Wider numbers grow the field.
pub const NUMBER_WIDTH: usize = 6;

/// Placed between the number field and the line content.
pub const NUMBER_SEPARATOR: &[u8] = b"  ";

/// Left-pad `text` with `fill` up to `width` characters. Longer input is returned as is.
pub fn pad_left(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.extend(std::iter::repeat_n(fill, width.saturating_sub(len)));
    padded.push_str(text);
    padded
}

/// Append `number` right-justified in the number field, followed by the separator.
pub fn write_number_prefix(out: &mut Vec<u8>, number: LineNumber) {
    let digits = number.value().to_string();
    out.extend_from_slice(pad_left(&digits, NUMBER_WIDTH, ' ').as_bytes());
    out.extend_from_slice(NUMBER_SEPARATOR);
}

/// `line` prefixed with its number, e.g. `    23  text`.
pub fn numbered_line(line: &[u8], number: impl Into<LineNumber>) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + NUMBER_WIDTH + NUMBER_SEPARATOR.len());
    write_number_prefix(&mut out, number.into());
    out.extend_from_slice(line);
    out
}
