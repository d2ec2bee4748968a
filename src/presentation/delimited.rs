// src/presentation/delimited.rs
use std::fmt::Write;

use super::{Report, RenderContext, format_share, sections};

/// CSV/TSV: one row per (scope, letter). The scope is the book path, or the
/// `TOTAL` label for the aggregate.
pub(super) fn render(report: &Report, ctx: &RenderContext<'_>, delimiter: char) -> String {
    let mut out = String::new();
    let ratio = ctx.output.ratio;

    let _ = write!(out, "scope{delimiter}letter{delimiter}count");
    if ratio {
        let _ = write!(out, "{delimiter}share");
    }
    out.push('\n');

    for section in sections(report, ctx.output.mode) {
        let scope = escape_field(&section.label, delimiter);
        for row in ctx.rows(section.table) {
            let _ = write!(out, "{scope}{delimiter}{}{delimiter}{}", row.letter, row.count);
            if ratio {
                let _ = write!(out, "{delimiter}{}", format_share(row.share));
            }
            out.push('\n');
        }
    }
    out
}

fn escape_field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
