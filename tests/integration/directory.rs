use predicates::prelude::*;

use crate::common::{Library, count_chars, json_stdout};

fn dir_json(lib: &Library, extra: &[&str]) -> serde_json::Value {
    let output = count_chars()
        .args(["--format", "json", "dir"])
        .arg(lib.path())
        .args(extra)
        .output()
        .expect("run count_chars");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    json_stdout(&output)
}

#[test]
fn sums_every_book() {
    let lib = Library::new();
    lib.write_book("a.txt", "аа");
    lib.write_book("b.txt", "аб");

    let doc = dir_json(&lib, &[]);
    assert_eq!(doc["books"].as_array().expect("books").len(), 2);
    assert_eq!(doc["total"]["counts"]["а"], 3);
    assert_eq!(doc["total"]["counts"]["б"], 1);
    assert_eq!(doc["total"]["letters"], 4);
}

#[test]
fn empty_directory_gives_empty_total() {
    let lib = Library::new();
    let doc = dir_json(&lib, &[]);
    assert_eq!(doc["total"]["letters"], 0);
    assert!(doc["total"]["counts"].as_object().expect("counts").is_empty());
}

#[test]
fn books_are_listed_in_name_order() {
    let lib = Library::new();
    lib.write_book("c.txt", "в");
    lib.write_book("a.txt", "а");
    lib.write_book("b.txt", "б");

    let doc = dir_json(&lib, &[]);
    let names: Vec<String> = doc["books"]
        .as_array()
        .expect("books")
        .iter()
        .map(|book| book["path"].as_str().expect("path").rsplit('/').next().expect("name").to_string())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn subdirectories_are_skipped_by_default() {
    let lib = Library::new();
    lib.write_book("a.txt", "а");
    lib.write_book("nested/b.txt", "б");

    let doc = dir_json(&lib, &[]);
    assert_eq!(doc["total"]["letters"], 1);

    let recursive = dir_json(&lib, &["--recursive"]);
    assert_eq!(recursive["total"]["letters"], 2);
}

#[test]
fn all_entries_fails_on_subdirectory() {
    let lib = Library::new();
    lib.write_book("a.txt", "а");
    lib.mkdir("nested");

    count_chars()
        .arg("dir")
        .arg(lib.path())
        .arg("--all-entries")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nested"));
}

#[test]
fn filters_by_extension_and_glob() {
    let lib = Library::new();
    lib.write_book("a.txt", "а");
    lib.write_book("b.md", "б");
    lib.write_book("draft.txt", "в");

    let doc = dir_json(&lib, &["--ext", "txt", "--exclude", "draft*"]);
    assert_eq!(doc["books"].as_array().expect("books").len(), 1);
    assert_eq!(doc["total"]["counts"]["а"], 1);
}

#[test]
fn hidden_files_are_counted_unless_excluded() {
    let lib = Library::new();
    lib.write_book(".hidden.txt", "я");

    assert_eq!(dir_json(&lib, &[])["total"]["letters"], 1);
    assert_eq!(dir_json(&lib, &["--no-hidden"])["total"]["letters"], 0);
}

#[test]
fn missing_directory_fails() {
    let lib = Library::new();
    count_chars()
        .arg("dir")
        .arg(lib.path().join("absent"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent"));
}

#[cfg(unix)]
#[test]
fn symlinked_book_is_counted() {
    let outside = Library::new();
    let target = outside.write_book("real.txt", "ааа");
    let lib = Library::new();
    lib.write_book("a.txt", "б");
    std::os::unix::fs::symlink(&target, lib.path().join("link.txt")).expect("create symlink");

    let doc = dir_json(&lib, &[]);
    assert_eq!(doc["books"].as_array().expect("books").len(), 2);
    assert_eq!(doc["total"]["counts"]["а"], 3);
    assert_eq!(doc["total"]["counts"]["б"], 1);
}
