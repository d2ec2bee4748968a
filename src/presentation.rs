// src/presentation.rs
//! Rendering of letter-frequency reports in the supported output formats.

mod delimited;
mod structured;
mod table;

use count_chars_domain::{
    Alphabet, BookReport, DirectoryReport, FrequencyTable,
    analytics::{Aggregator, LetterRow, Summary, rank},
    options::{OutputFormat, OutputMode},
};
use count_chars_shared_kernel::Result;

use crate::config::OutputConfig;

/// Result of running one command.
#[derive(Debug, Clone)]
pub enum Report {
    Book(BookReport),
    Directory(DirectoryReport),
}

impl Report {
    pub fn total(&self) -> &FrequencyTable {
        match self {
            Self::Book(book) => &book.table,
            Self::Directory(dir) => &dir.total,
        }
    }

    /// Books to list individually under `mode`.
    fn listed_books(&self, mode: OutputMode) -> &[BookReport] {
        match (self, mode) {
            (Self::Directory(dir), OutputMode::Full) => dir.books.as_slice(),
            (Self::Book(book), _) => std::slice::from_ref(book),
            (Self::Directory(_), OutputMode::TotalOnly) => &[],
        }
    }
}

/// Everything a formatter needs besides the report itself.
pub struct RenderContext<'a> {
    pub alphabet: &'a Alphabet,
    pub alphabet_name: &'a str,
    pub output: &'a OutputConfig,
}

impl RenderContext<'_> {
    fn rows(&self, table: &FrequencyTable) -> Vec<LetterRow> {
        rank(table, self.alphabet, self.output.rank)
    }

    fn summary(&self, report: &Report) -> Summary {
        match report {
            Report::Book(book) => Aggregator::summarize_table(&book.table, self.alphabet, 1),
            Report::Directory(dir) => Aggregator::summarize(dir, self.alphabet),
        }
    }
}

/// One block of output: a labelled table.
struct Section<'a> {
    label: String,
    table: &'a FrequencyTable,
}

/// Sections in print order: listed books, then the aggregate for directories.
fn sections(report: &Report, mode: OutputMode) -> Vec<Section<'_>> {
    let mut out: Vec<Section<'_>> = report
        .listed_books(mode)
        .iter()
        .map(|book| Section { label: book.path.display().to_string(), table: &book.table })
        .collect();
    if let Report::Directory(dir) = report {
        out.push(Section { label: format!("TOTAL ({} books)", dir.book_count()), table: &dir.total });
    }
    out
}

/// Render `report` according to `ctx.output.format`.
///
/// # Errors
///
/// Returns `Err` when a structured format fails to serialize.
pub fn render(report: &Report, ctx: &RenderContext<'_>) -> Result<String> {
    match ctx.output.format {
        OutputFormat::Table => Ok(table::render_table(report, ctx)),
        OutputFormat::Md => Ok(table::render_markdown(report, ctx)),
        OutputFormat::Csv => Ok(delimited::render(report, ctx, ',')),
        OutputFormat::Tsv => Ok(delimited::render(report, ctx, '\t')),
        OutputFormat::Json => structured::render_json(report, ctx),
        OutputFormat::Yaml => structured::render_yaml(report, ctx),
        OutputFormat::Jsonl => structured::render_jsonl(report, ctx),
    }
}

fn format_share(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}
