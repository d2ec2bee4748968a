use count_chars_domain::{BookReport, DirectoryReport, options::EntryPolicy};
use count_chars_ports::{
    filesystem::{BookEntryDto, BookEnumerator, ListingPlan},
    progress::{NoProgress, ProgressSink},
};
use count_chars_shared_kernel::{ApplicationError, ErrorContext, Result};
use log::{debug, info};

use crate::book::CountBook;

/// Directory aggregator: counts every listed book and sums the tables.
pub struct CountDirectory<'a> {
    enumerator: &'a dyn BookEnumerator,
    counter: CountBook<'a>,
    progress: &'a dyn ProgressSink,
}

impl<'a> CountDirectory<'a> {
    pub fn new(enumerator: &'a dyn BookEnumerator, counter: CountBook<'a>) -> Self {
        Self { enumerator, counter, progress: &NoProgress }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Count the books `plan` selects, stopping at the first failure.
    ///
    /// Listed paths are counted as given; they are not re-resolved under the
    /// per-file counter's base directory.
    pub fn count_in_dir(&self, plan: &ListingPlan) -> Result<DirectoryReport> {
        let entries = self
            .enumerator
            .collect(plan)
            .with_context(|| format!("listing books under '{}'", plan.root.display()))?;
        debug!("{} entries listed under {}", entries.len(), plan.root.display());

        let mut books = Vec::with_capacity(entries.len());
        for entry in entries {
            if !admits(plan.entries, &entry) {
                debug!("skipping non-regular entry {}", entry.path.display());
                continue;
            }
            let table = self.counter.count_path(&entry.path).map_err(|source| {
                ApplicationError::BookCountFailed { path: entry.path.clone(), source: Box::new(source) }
            })?;
            self.progress.on_book(&entry.path, table.total())?;
            books.push(BookReport::new(entry.path, table));
        }

        let report = DirectoryReport::from_books(&plan.root, books);
        self.progress.on_complete(report.book_count(), report.total.total())?;
        info!(
            "counted {} books under {}: {} letters",
            report.book_count(),
            plan.root.display(),
            report.total.total()
        );
        Ok(report)
    }
}

fn admits(policy: EntryPolicy, entry: &BookEntryDto) -> bool {
    match policy {
        EntryPolicy::All => true,
        EntryPolicy::RegularFiles => entry.is_file,
    }
}
