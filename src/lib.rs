// src/lib.rs
//! `count_chars`: letter-frequency counts for Cyrillic texts.
//!
//! The binary wires the workspace crates together: `cli` parses arguments
//! into a [`config::Config`], [`app::run`] counts and renders, and
//! `presentation` owns every output format.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
