// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use count_chars::{app, cli, logging};

fn main() -> ExitCode {
    let (config, logging_options) = match cli::load_config() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&logging_options);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
