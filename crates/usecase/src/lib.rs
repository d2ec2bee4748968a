//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port implementations
//! to implement specific use cases:
//!
//! - [`book`]: Count alphabet letters in one file under a base directory
//! - [`directory`]: Count every book of a directory and aggregate the tables
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod book;
pub mod directory;

pub use book::{CountBook, DEFAULT_BASE_DIR};
pub use directory::CountDirectory;
