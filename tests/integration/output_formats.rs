use std::fs;

use predicates::prelude::*;

use crate::common::{Library, count_chars, json_stdout};

fn library() -> Library {
    let lib = Library::new();
    lib.write_book("a.txt", "Мама мыла раму");
    lib.write_book("b.txt", "ура");
    lib
}

#[test]
fn table_is_default() {
    let lib = library();
    count_chars()
        .arg("dir")
        .arg(lib.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("alphabet=russian (33 letters)"))
        .stdout(predicate::str::contains("== TOTAL (2 books) =="))
        .stdout(predicate::str::contains("Completed: 2 books, 15 letters, most common: а (5)."));
}

#[test]
fn total_only_mode_omits_books() {
    let lib = library();
    let output = count_chars()
        .args(["--format", "json", "--mode", "total-only", "dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    let doc = json_stdout(&output);
    assert!(doc.get("books").is_none());
    assert_eq!(doc["total"]["letters"], 15);
}

#[test]
fn count_order_with_top() {
    let lib = library();
    count_chars()
        .args(["--format", "csv", "--mode", "total-only", "--sort", "count", "--top", "2", "dir"])
        .arg(lib.path())
        .assert()
        .success()
        .stdout("scope,letter,count\nTOTAL (2 books),а,5\nTOTAL (2 books),м,4\n");
}

#[test]
fn zeros_lists_whole_alphabet() {
    let lib = library();
    let output = count_chars()
        .args(["--format", "json", "--mode", "total-only", "--zeros", "dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    let doc = json_stdout(&output);
    let counts = doc["total"]["counts"].as_object().expect("counts");
    assert_eq!(counts.len(), 33);
    assert_eq!(counts["я"], 0);
}

#[test]
fn jsonl_ends_with_total_line() {
    let lib = library();
    let output = count_chars()
        .args(["--format", "jsonl", "dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    let last: serde_json::Value = serde_json::from_str(lines[2]).expect("json line");
    assert_eq!(last["type"], "total");
}

#[test]
fn markdown_and_yaml_render() {
    let lib = library();
    count_chars()
        .args(["--format", "md", "dir"])
        .arg(lib.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| Letter | Count |"))
        .stdout(predicate::str::contains("| **Total** | 15 |"));
    count_chars()
        .args(["--format", "yaml", "--mode", "total-only", "dir"])
        .arg(lib.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("letters: 15"));
}

#[test]
fn output_flag_writes_file() {
    let lib = library();
    let out = lib.path().join("report.tsv");
    count_chars()
        .args(["--format", "tsv", "--ratio", "--mode", "total-only", "--output"])
        .arg(&out)
        .args(["book", "b.txt", "--base-dir"])
        .arg(lib.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).expect("report written");
    assert!(written.starts_with("scope\tletter\tcount\tshare\n"));
    assert!(written.contains("\tу\t1\t33.33%"));
}
