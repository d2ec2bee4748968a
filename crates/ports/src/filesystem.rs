use std::path::{Path, PathBuf};

use count_chars_domain::options::{DecodePolicy, EntryPolicy};
use count_chars_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling which directory entries become books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPlan {
    pub root: PathBuf,
    pub entries: EntryPolicy,
    pub recursive: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    /// Lower-case extensions without the dot; empty means any.
    pub extensions: Vec<String>,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl ListingPlan {
    /// Plan listing every direct entry of `root` that is a regular file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: EntryPolicy::default(),
            recursive: false,
            include_hidden: true,
            follow_links: false,
            extensions: Vec::new(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// DTO representing a directory entry discovered by a [`BookEnumerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntryDto {
    pub path: PathBuf,
    pub name: String,
    pub is_file: bool,
}

/// Port for listing the books of a directory.
pub trait BookEnumerator: Send + Sync {
    fn collect(&self, plan: &ListingPlan) -> Result<Vec<BookEntryDto>>;
}

/// Port for reading a text file line by line.
///
/// Lines are handed over with their terminators stripped.
pub trait TextSource: Send + Sync {
    fn for_each_line(&self, path: &Path, decode: DecodePolicy, visit: &mut dyn FnMut(&str)) -> Result<()>;
}
