use predicates::prelude::*;

use crate::common::{Library, count_chars, json_stdout};

#[test]
fn counts_book_under_base_dir() {
    let lib = Library::new();
    lib.write_book("war.txt", "Война и мир\nВОЙНА");

    let output = count_chars()
        .args(["--format", "json", "book", "war.txt", "--base-dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    assert!(output.status.success());

    let doc = json_stdout(&output);
    let book = &doc["books"][0];
    assert!(book["path"].as_str().expect("path").ends_with("war.txt"));
    assert_eq!(doc["total"]["counts"]["в"], 2);
    assert_eq!(doc["total"]["counts"]["о"], 2);
    assert_eq!(doc["total"]["counts"]["й"], 2);
    assert_eq!(doc["total"]["counts"]["и"], 2);
    assert_eq!(doc["total"]["letters"], 14);
}

#[test]
fn default_base_dir_is_text() {
    let lib = Library::new();
    lib.write_book("text/book.txt", "ёж");

    count_chars()
        .current_dir(lib.path())
        .args(["--format", "csv", "book", "book.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text/book.txt,ж,1"))
        .stdout(predicate::str::contains("text/book.txt,ё,1"));
}

#[test]
fn ignores_non_alphabet_characters() {
    let lib = Library::new();
    lib.write_book("mixed.txt", "Hello, 123! Привет.\n\t—");

    let output = count_chars()
        .args(["--format", "json", "book", "mixed.txt", "--base-dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    let doc = json_stdout(&output);
    assert_eq!(doc["total"]["letters"], 6);
    assert!(doc["total"]["counts"].get("h").is_none());
}

#[test]
fn missing_book_fails() {
    let lib = Library::new();
    count_chars()
        .args(["book", "absent.txt", "--base-dir"])
        .arg(lib.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn invalid_utf8_fails_unless_lossy() {
    let lib = Library::new();
    lib.write_bytes("broken.txt", b"\xd0\xb0\xff\xd0\xb1");

    count_chars()
        .args(["book", "broken.txt", "--base-dir"])
        .arg(lib.path())
        .assert()
        .failure();

    let output = count_chars()
        .args(["--lossy", "--format", "json", "book", "broken.txt", "--base-dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    assert!(output.status.success());
    let doc = json_stdout(&output);
    assert_eq!(doc["total"]["counts"]["а"], 1);
    assert_eq!(doc["total"]["counts"]["б"], 1);
}

#[test]
fn basic_alphabet_drops_yo() {
    let lib = Library::new();
    lib.write_book("yo.txt", "ёлка");

    let output = count_chars()
        .args(["--alphabet", "russian-basic", "--format", "json", "book", "yo.txt", "--base-dir"])
        .arg(lib.path())
        .output()
        .expect("run count_chars");
    let doc = json_stdout(&output);
    assert_eq!(doc["alphabet"]["name"], "russian-basic");
    assert_eq!(doc["total"]["letters"], 3);
    assert!(doc["total"]["counts"].get("ё").is_none());
}
