use std::path::{Path, PathBuf};

use count_chars_domain::{Alphabet, BookReport, FrequencyTable, options::DecodePolicy};
use count_chars_ports::filesystem::TextSource;
use count_chars_shared_kernel::Result;
use log::debug;

/// Directory that book names are resolved against unless overridden.
pub const DEFAULT_BASE_DIR: &str = "text";

/// Per-file counter.
pub struct CountBook<'a> {
    source: &'a dyn TextSource,
    alphabet: &'a Alphabet,
    decode: DecodePolicy,
    base_dir: PathBuf,
}

impl<'a> CountBook<'a> {
    pub fn new(source: &'a dyn TextSource, alphabet: &'a Alphabet) -> Self {
        Self { source, alphabet, decode: DecodePolicy::default(), base_dir: PathBuf::from(DEFAULT_BASE_DIR) }
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    #[must_use]
    pub fn with_decode(mut self, decode: DecodePolicy) -> Self {
        self.decode = decode;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.alphabet
    }

    /// Path a book name refers to. An absolute `filename` replaces the base
    /// directory entirely.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Count the letters of `filename`, resolved under the base directory.
    pub fn count_chars_in_book(&self, filename: impl AsRef<Path>) -> Result<FrequencyTable> {
        self.count_path(&self.resolve(filename))
    }

    /// Like [`Self::count_chars_in_book`], keeping the resolved path.
    pub fn run(&self, filename: impl AsRef<Path>) -> Result<BookReport> {
        let path = self.resolve(filename);
        let table = self.count_path(&path)?;
        Ok(BookReport::new(path, table))
    }

    /// Count the letters of the file at `path` as given.
    pub fn count_path(&self, path: &Path) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        self.source.for_each_line(path, self.decode, &mut |line| table.tally_line(line, self.alphabet))?;
        debug!("counted {} letters ({} distinct) in {}", table.total(), table.len(), path.display());
        Ok(table)
    }
}
