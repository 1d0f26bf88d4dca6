// tests/cli/sources.rs
use predicates::prelude::*;

use crate::common::{Fixture, neko};

#[test]
fn files_are_concatenated_in_order() {
    let fx = Fixture::new();
    let first = fx.write("first.txt", "one\n");
    let second = fx.write("second.txt", "two\n");

    neko().arg(&first).arg(&second).assert().success().stdout("one\ntwo\n");
}

#[test]
fn numbering_restarts_for_each_file() {
    let fx = Fixture::new();
    let first = fx.write("a.txt", "a\nb\n");
    let second = fx.write("b.txt", "c\n");

    neko()
        .arg("-n")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("     1  a\n     2  b\n     1  c\n");
}

#[test]
fn dash_reads_stdin_between_files() {
    let fx = Fixture::new();
    let f = fx.write("f", "from f\n");
    let g = fx.write("g", "from g\n");

    neko()
        .arg(&f)
        .arg("-")
        .arg(&g)
        .write_stdin("from stdin\n")
        .assert()
        .success()
        .stdout("from f\nfrom stdin\nfrom g\n");
}

#[test]
fn missing_file_is_reported_and_the_rest_still_printed() {
    let fx = Fixture::new();
    let before = fx.write("before.txt", "before\n");
    let missing = fx.missing("missing.txt");
    let after = fx.write("after.txt", "after\n");

    neko()
        .arg(&before)
        .arg(&missing)
        .arg(&after)
        .assert()
        .code(1)
        .stdout("before\nafter\n")
        .stderr(predicate::str::diff(format!("neko: {}: No such file or directory\n", missing.display())));
}

#[cfg(unix)]
#[test]
fn directory_operand_is_a_read_error() {
    let fx = Fixture::new();
    let after = fx.write("after.txt", "after\n");

    neko()
        .arg(fx.path())
        .arg(&after)
        .assert()
        .code(1)
        .stdout("after\n")
        .stderr(predicate::str::contains("Is a directory"));
}

#[test]
fn overlong_line_stops_only_that_file() {
    let fx = Fixture::new();
    let long = fx.write("long.txt", "ok\n0123456789\nnever shown\n");
    let next = fx.write("next.txt", "next\n");

    neko()
        .args(["--max-line-length", "8"])
        .arg(&long)
        .arg(&next)
        .assert()
        .code(1)
        .stdout("ok\nnext\n")
        .stderr(predicate::str::diff(format!("neko: {}: line exceeds 8 bytes\n", long.display())));
}

#[test]
fn crlf_line_at_the_limit_is_not_too_long() {
    let fx = Fixture::new();
    let dos = fx.write("dos.txt", "12345678\r\nabc\r\n");

    neko()
        .args(["--max-line-length", "8"])
        .arg(&dos)
        .assert()
        .success()
        .stdout("12345678\nabc\n")
        .stderr("");
}

#[test]
fn zero_line_length_is_rejected_before_reading() {
    neko()
        .args(["--max-line-length", "0"])
        .write_stdin("x\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("maximum line length"));
}

#[test]
fn all_sources_failing_still_exits_with_one() {
    let fx = Fixture::new();
    neko()
        .arg(fx.missing("a"))
        .arg(fx.missing("b"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("a: No such file").and(predicate::str::contains("b: No such file")));
}
