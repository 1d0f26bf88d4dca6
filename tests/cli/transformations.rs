// tests/cli/transformations.rs
use crate::common::neko;

fn stdout_of(args: &[&str], stdin: impl Into<Vec<u8>>) -> Vec<u8> {
    let assert = neko().args(args).write_stdin(stdin).assert().success();
    assert.get_output().stdout.clone()
}

#[test]
fn number_all_lines() {
    assert_eq!(stdout_of(&["-n"], "a\n\nb\n"), b"     1  a\n     2  \n     3  b\n".to_vec());
}

#[test]
fn number_nonblank_lines() {
    assert_eq!(
        stdout_of(&["-b"], "\nhello\n\nworld\tend\n"),
        b"\n     1  hello\n\n     2  world\tend\n".to_vec()
    );
}

#[test]
fn number_nonblank_overrides_number() {
    assert_eq!(stdout_of(&["-n", "-b"], "\nx\n"), b"\n     1  x\n".to_vec());
}

#[test]
fn show_ends_both_spellings() {
    assert_eq!(stdout_of(&["-E"], "x\n\n"), b"x$\n$\n".to_vec());
    assert_eq!(stdout_of(&["-e"], "x\n\n"), b"x$\n$\n".to_vec());
    assert_eq!(stdout_of(&["--show-ends"], "x\n"), b"x$\n".to_vec());
}

#[test]
fn show_tabs() {
    assert_eq!(stdout_of(&["-t"], "a\tb\t\n"), b"a^Ib^I\n".to_vec());
}

#[test]
fn show_nonprinting_escapes_bytes_and_keeps_tabs() {
    let input = vec![0x01, 0x7F, 0x80, 0xFF, 0xA0, b'\t', b'\n'];
    let expected = vec![
        b'^', b'A', b'^', b'?', b'M', b'-', 0x00, b'M', b'-', b'^', b'?', b'M', b'-', b'^', b'`', b'\t', b'\n',
    ];
    assert_eq!(stdout_of(&["-v"], input), expected);
}

#[test]
fn show_nonprinting_with_tabs() {
    assert_eq!(stdout_of(&["-vt"], "\x1b\t\n"), b"^[^I\n".to_vec());
}

#[test]
fn stages_compose_in_order() {
    assert_eq!(stdout_of(&["-nEtv"], "a\tb\x07\n"), b"     1  a^Ib^G$\n".to_vec());
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(stdout_of(&["-E"], "dos\r\nline\r\n"), b"dos$\nline$\n".to_vec());
}

#[test]
fn no_flags_is_byte_exact() {
    let input = b"caf\xc3\xa9 \x01\x7f\n".to_vec();
    assert_eq!(stdout_of(&[], input.clone()), input);
}
