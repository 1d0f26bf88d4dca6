// crates/domain/src/transform/tabs.rs
use memchr::memchr_iter;

pub const TAB_MARKER: &[u8] = b"^I";

/// Copy `input` into `out`, rendering every tab as `^I`.
pub fn visualize_tabs(input: &[u8], out: &mut Vec<u8>) {
    let mut start = 0;
    for pos in memchr_iter(b'\t', input) {
        out.extend_from_slice(&input[start..pos]);
        out.extend_from_slice(TAB_MARKER);
        start = pos + 1;
    }
    out.extend_from_slice(&input[start..]);
}
