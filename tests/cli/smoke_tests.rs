use predicates::prelude::*;

use crate::common::count_chars;

#[test]
fn shows_help() {
    count_chars()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_chars"))
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("dir"));
}

#[test]
fn shows_version() {
    count_chars()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_a_subcommand() {
    count_chars().assert().failure();
}

#[test]
fn rejects_unknown_sort_key() {
    count_chars()
        .args(["dir", ".", "--sort", "frequency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort key"));
}

#[test]
fn rejects_uppercase_custom_letters() {
    count_chars()
        .args(["--letters", "АБВ", "dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--letters"));
}
