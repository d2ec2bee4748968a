use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{analytics::Aggregator, model::FrequencyTable, value_objects::CharCount};

/// Letter counts of a single counted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReport {
    pub path: PathBuf,
    pub table: FrequencyTable,
}

impl BookReport {
    pub fn new(path: impl Into<PathBuf>, table: FrequencyTable) -> Self {
        Self { path: path.into(), table }
    }

    pub fn total(&self) -> CharCount {
        self.table.total()
    }
}

/// Per-book tables of a directory together with their aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub root: PathBuf,
    pub books: Vec<BookReport>,
    pub total: FrequencyTable,
}

impl DirectoryReport {
    /// Build a report, summing the book tables into the aggregate.
    pub fn from_books(root: impl Into<PathBuf>, books: Vec<BookReport>) -> Self {
        let total = Aggregator::aggregate(books.iter().map(|book| &book.table));
        Self { root: root.into(), books, total }
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
