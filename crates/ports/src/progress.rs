use std::path::Path;

use count_chars_shared_kernel::{CharCount, Result};

pub trait ProgressSink: Send + Sync {
    fn on_book(&self, path: &Path, letters: CharCount) -> Result<()>;
    fn on_complete(&self, books: usize, letters: CharCount) -> Result<()>;
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_book(&self, _path: &Path, _letters: CharCount) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _books: usize, _letters: CharCount) -> Result<()> {
        Ok(())
    }
}
