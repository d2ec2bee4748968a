use std::path::Path;

use count_chars_ports::progress::ProgressSink;
use count_chars_shared_kernel::{CharCount, Result};
use log::info;

/// Progress sink that reports through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_book(&self, path: &Path, letters: CharCount) -> Result<()> {
        info!("{}: {letters} letters", path.display());
        Ok(())
    }

    fn on_complete(&self, books: usize, letters: CharCount) -> Result<()> {
        info!("done: {books} books, {letters} letters");
        Ok(())
    }
}
