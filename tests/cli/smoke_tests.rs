use crate::common::Workspace;
use predicates::prelude::*;

#[test]
fn shows_help_without_arguments() {
    Workspace::new()
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-line-length, -L"));
}

#[test]
fn shows_help_with_flag() {
    Workspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--words, -w"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn shows_version() {
    Workspace::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("analogue of wc"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn default_triple_for_single_file() {
    let ws = Workspace::new();
    ws.write("file.txt", "hello world\n");
    ws.cmd()
        .arg("file.txt")
        .assert()
        .success()
        .stdout(" 1 2 12 file.txt\n");
}

#[test]
fn every_metric_in_column_order() {
    let ws = Workspace::new();
    ws.write("lines.txt", "ab\nabcdef\na\n");
    ws.cmd()
        .args(["-L", "--bytes", "-m", "--words", "-l", "lines.txt"])
        .assert()
        .success()
        .stdout(" 3 3 12 12 6 lines.txt\n");
}

#[test]
fn counts_characters_not_bytes() {
    let ws = Workspace::new();
    ws.write("utf8.txt", "naïve café\n");
    ws.cmd()
        .args(["-m", "-c", "utf8.txt"])
        .assert()
        .success()
        .stdout(" 11 13 utf8.txt\n");
}
