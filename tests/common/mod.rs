// tests/common/mod.rs
//! Shared helpers for the binary-level tests.

pub mod temp;

use assert_cmd::Command;

#[allow(unused_imports)]
pub use temp::Library;

/// The `count_chars` binary, run with `RUST_LOG` cleared so log lines on
/// stderr stay predictable.
#[allow(dead_code)]
pub fn count_chars() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_chars"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Parse stdout of a `--format json` run.
#[allow(dead_code)]
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
