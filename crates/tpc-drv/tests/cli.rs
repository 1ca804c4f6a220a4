//! End-to-end CLI tests: invoke the `tpc` binary as a subprocess and
//! check its exit code and output, the way a user would (spec.md §6).

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn tpc() -> Command {
    Command::cargo_bin("tpc").expect("tpc binary should build")
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp source file");
    write!(file, "{contents}").expect("failed to write temp source file");
    file
}

const HELLO: &str = "program hello; \
     var a, b, c : integer; \
     procedure main; \
     begin \
       a := b + c * 2 \
     end.";

#[test]
fn default_run_prints_quaternions_with_one_based_ordinals() {
    let file = source_file(HELLO);

    tpc()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(1) (*, c, 2, t1)"))
        .stdout(predicate::str::contains("(2) (+, b, t1, t2)"))
        .stdout(predicate::str::contains("(3) (:=, t2, -, a)"));
}

#[test]
fn lexer_flag_stops_after_tokenizing() {
    let file = source_file(HELLO);

    tpc()
        .arg("-l")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Prog"))
        .stdout(predicate::str::contains("IntConst(2)"))
        .stdout(predicate::str::contains("(j=,").not());
}

#[test]
fn parser_flag_stops_after_parsing_and_prints_ast() {
    let file = source_file(HELLO);

    tpc()
        .arg("--parser")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Program"))
        .stdout(predicate::str::contains("VariableAssignment"));
}

#[test]
fn lexer_and_parser_flags_together_are_rejected() {
    let file = source_file(HELLO);

    tpc()
        .arg("-l")
        .arg("-p")
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn output_flag_writes_to_a_file_instead_of_stdout() {
    let file = source_file(HELLO);
    let out = NamedTempFile::new().expect("failed to create temp output file");

    tpc()
        .arg(file.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out.path()).expect("output file should exist");
    assert!(written.contains("(:=, t2, -, a)"));
}

#[test]
fn a_lexer_error_exits_non_zero() {
    let file = source_file("program p; var a : integer; procedure q; begin a := 1 # end.");

    tpc()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn a_parse_error_exits_non_zero() {
    let file = source_file("program p; var a : integer; procedure q; begin a := end.");

    tpc().arg(file.path()).assert().failure();
}

#[test]
fn a_missing_input_file_exits_non_zero() {
    tpc()
        .arg("/nonexistent/path/does-not-exist.pas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn multiple_input_files_are_each_compiled_and_separated_in_output() {
    let a = source_file(HELLO);
    let b = source_file("program other; var x : integer; procedure r; begin x := 1 end.");

    tpc()
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(:=, t2, -, a)"))
        .stdout(predicate::str::contains("(:=, 1, -, x)"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    tpc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
