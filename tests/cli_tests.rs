//! CLI integration tests for the `mypl` binary.
//!
//! Uses `assert_cmd` to spawn the binary and check exit codes, stdout and
//! stderr. Tests run from the package root so `demos/` paths resolve.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mypl() -> Command {
    let mut cmd = cargo_bin_cmd!("mypl");
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

/// Write `source` to a fresh temp file and return (dir guard, path)
fn source_file(source: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.mypl");
    fs::write(&path, source).unwrap();
    (dir, path.to_string_lossy().into_owned())
}

#[test]
fn no_subcommand_prints_help() {
    mypl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_valid_demo() {
    mypl()
        .args(["check", "demos/linked_list.mypl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok (4 declarations)"));
}

#[test]
fn check_broken_demo_shows_caret_diagnostic() {
    mypl()
        .args(["check", "demos/broken.mypl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "syntax error: expecting ':' after parameter name, found ')'",
        ))
        .stderr(predicate::str::contains("demos/broken.mypl:3:19"))
        .stderr(predicate::str::contains("3 | fun int square( x )"));
}

#[test]
fn check_missing_file_fails_clearly() {
    mypl()
        .args(["check", "demos/does_not_exist.mypl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read source file"));
}

#[test]
fn print_formats_source() {
    let (_dir, path) = source_file("fun int add(a:int,b:int) return a+b end");
    mypl()
        .args(["print", &path])
        .assert()
        .success()
        .stdout("fun int add(a: int, b: int)\n   return a + b\nend\n");
}

#[test]
fn tokens_dumps_one_per_line() {
    let (_dir, path) = source_file("var x = 1.5\n");
    mypl()
        .args(["tokens", &path])
        .assert()
        .success()
        .stdout("1:1 VAR var\n1:5 ID x\n1:7 ASSIGN =\n1:9 DOUBLE_VAL 1.5\n2:1 EOS \n");
}

#[test]
fn tokens_stops_at_lexer_error() {
    let (_dir, path) = source_file("x = 1\ny = 'ab'\n");
    mypl()
        .args(["tokens", &path])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:5 INT_VAL 1"))
        .stdout(predicate::str::contains("2:1 ID y"))
        .stderr(predicate::str::contains("lexer error"))
        .stderr(predicate::str::contains(":2:5"));
}

#[test]
fn verbose_flag_logs_to_stderr() {
    mypl()
        .args(["--verbose", "check", "demos/fizzbuzz.mypl"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed 3 declarations"));
}
