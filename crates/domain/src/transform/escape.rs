// crates/domain/src/transform/escape.rs
//! `cat -v` notation: control bytes as `^X`, DEL as `^?`, high-bit bytes with an `M-` prefix.

/// Append the visible form of a single byte.
///
/// Tabs survive untouched unless `show_tabs` is set; with `show_tabs` the tab stage
/// has normally already rewritten them, but a stray one still becomes `^I`.
#[inline]
pub fn escape_byte(byte: u8, show_tabs: bool, out: &mut Vec<u8>) {
    match byte {
        b'\t' if !show_tabs => out.push(b'\t'),
        0..=31 => out.extend_from_slice(&[b'^', byte + 64]),
        32..=126 => out.push(byte),
        127 => out.extend_from_slice(b"^?"),
        255 => out.extend_from_slice(b"M-^?"),
        // high control range, emitted as the raw low control byte
        128..=159 => out.extend_from_slice(&[b'M', b'-', byte - 128]),
        160..=254 => out.extend_from_slice(&[b'M', b'-', b'^', byte - 128 + 64]),
    }
}

/// Append the escaped form of `input` to `out`.
pub fn escape_into(input: &[u8], show_tabs: bool, out: &mut Vec<u8>) {
    out.reserve(input.len());
    for &byte in input {
        escape_byte(byte, show_tabs, out);
    }
}

/// Escaped copy of `input`.
pub fn convert_non_printing(input: &[u8], show_tabs: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    escape_into(input, show_tabs, &mut out);
    out
}
