// tests/cli/output.rs
use std::process::{Command, Stdio};

use crate::common::Fixture;

/// Closing the reading end of stdout early ends the run with status 1 and no message.
#[test]
fn closed_stdout_exits_one_without_a_diagnostic() {
    let fx = Fixture::new();
    let big = fx.write("big.txt", "0123456789abcdef\n".repeat(512 * 1024));

    let mut child = Command::new(env!("CARGO_BIN_EXE_neko"))
        .arg(&big)
        .env_remove("NEKO_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn neko");
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("wait for neko");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

