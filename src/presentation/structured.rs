// src/presentation/structured.rs
use count_chars_domain::{FrequencyTable, analytics::LetterRow};
use count_chars_shared_kernel::Result;
use serde::{Serialize, Serializer, ser::SerializeMap};

use super::{Report, RenderContext};

#[derive(Serialize)]
struct ReportDoc {
    version: &'static str,
    generated_at: String,
    alphabet: AlphabetDoc,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    books: Vec<TableDoc>,
    total: TableDoc,
}

#[derive(Serialize)]
struct AlphabetDoc {
    name: String,
    letters: String,
}

#[derive(Serialize)]
struct TableDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    letters: usize,
    distinct: usize,
    counts: Counts,
    #[serde(skip_serializing_if = "Option::is_none")]
    shares: Option<Shares>,
}

/// Letter counts serialized as a map that keeps row order.
struct Counts(Vec<(char, usize)>);

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (letter, count) in &self.0 {
            map.serialize_entry(&letter.to_string(), count)?;
        }
        map.end()
    }
}

/// Shares rounded to four decimals, in row order.
struct Shares(Vec<(char, f64)>);

impl Serialize for Shares {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (letter, share) in &self.0 {
            map.serialize_entry(&letter.to_string(), &((share * 10_000.0).round() / 10_000.0))?;
        }
        map.end()
    }
}

fn table_doc(path: Option<String>, table: &FrequencyTable, ctx: &RenderContext<'_>) -> TableDoc {
    let rows: Vec<LetterRow> = ctx.rows(table);
    TableDoc {
        path,
        letters: table.total().value(),
        distinct: table.len(),
        counts: Counts(rows.iter().map(|row| (row.letter, row.count.value())).collect()),
        shares: ctx.output.ratio.then(|| Shares(rows.iter().map(|row| (row.letter, row.share)).collect())),
    }
}

fn book_docs(report: &Report, ctx: &RenderContext<'_>) -> Vec<TableDoc> {
    report
        .listed_books(ctx.output.mode)
        .iter()
        .map(|book| table_doc(Some(book.path.display().to_string()), &book.table, ctx))
        .collect()
}

fn report_doc(report: &Report, ctx: &RenderContext<'_>) -> ReportDoc {
    ReportDoc {
        version: crate::VERSION,
        generated_at: chrono::Local::now().to_rfc3339(),
        alphabet: AlphabetDoc { name: ctx.alphabet_name.to_string(), letters: ctx.alphabet.to_string() },
        books: book_docs(report, ctx),
        total: table_doc(None, report.total(), ctx),
    }
}

pub(super) fn render_json(report: &Report, ctx: &RenderContext<'_>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&report_doc(report, ctx))?;
    out.push('\n');
    Ok(out)
}

pub(super) fn render_yaml(report: &Report, ctx: &RenderContext<'_>) -> Result<String> {
    Ok(serde_yaml::to_string(&report_doc(report, ctx))?)
}

#[derive(Serialize)]
struct JsonlLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    table: &'a TableDoc,
}

/// One `book` line per listed book, then a closing `total` line.
pub(super) fn render_jsonl(report: &Report, ctx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::new();
    for book in book_docs(report, ctx) {
        out.push_str(&serde_json::to_string(&JsonlLine { kind: "book", table: &book })?);
        out.push('\n');
    }
    let total = table_doc(None, report.total(), ctx);
    out.push_str(&serde_json::to_string(&JsonlLine { kind: "total", table: &total })?);
    out.push('\n');
    Ok(out)
}
