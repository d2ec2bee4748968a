//! Integration test suite for end-to-end scenarios.

mod common;

#[path = "integration/book.rs"]
mod book;
#[path = "integration/directory.rs"]
mod directory;
#[path = "integration/output_formats.rs"]
mod output_formats;
