// tests/cli/smoke_tests.rs
use predicates::prelude::*;

use crate::common::neko;

#[test]
fn shows_help() {
    neko()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("neko [OPTION]... [FILE]..."))
        .stdout(predicate::str::contains("--number-nonblank"))
        .stdout(predicate::str::contains("neko f - g"));
}

#[test]
fn short_help_flag() {
    neko().arg("-h").assert().success().stdout(predicate::str::contains("--show-tabs"));
}

#[test]
fn shows_version() {
    neko()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    neko().arg("-z").assert().code(2).stdout(predicate::str::is_empty());
}

#[test]
fn copies_stdin_when_no_files_are_given() {
    neko().write_stdin("a\nb\n").assert().success().stdout("a\nb\n").stderr("");
}

#[test]
fn final_line_without_newline_gets_one() {
    neko().write_stdin("a\nlast").assert().success().stdout("a\nlast\n");
}

#[test]
fn empty_input_produces_no_output() {
    neko().write_stdin("").assert().success().stdout("");
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    neko()
        .args(["--verbose", "--verbose"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("DEBUG").and(predicate::str::contains("neko_usecase")));
}

#[test]
fn log_filter_can_come_from_the_environment() {
    neko()
        .env("NEKO_LOG", "neko_usecase=debug")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("run finished"));
}

#[test]
fn no_log_output_by_default() {
    neko().write_stdin("x\n").assert().success().stderr("");
}
