// src/presentation/table.rs
use std::fmt::Write;

use super::{Report, RenderContext, format_share, sections};

pub(super) fn render_table(report: &Report, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    let ratio = ctx.output.ratio;

    let _ = writeln!(
        out,
        "count_chars v{} · alphabet={} ({} letters)",
        crate::VERSION,
        ctx.alphabet_name,
        ctx.alphabet.len()
    );

    for section in sections(report, ctx.output.mode) {
        out.push('\n');
        let _ = writeln!(out, "== {} ==", section.label);
        if ratio {
            out.push_str("LETTER       COUNT       SHARE\n");
        } else {
            out.push_str("LETTER       COUNT\n");
        }
        out.push_str("------------------------------\n");
        for row in ctx.rows(section.table) {
            if ratio {
                let _ = writeln!(out, "{:<6}{:>12}{:>12}", row.letter, row.count, format_share(row.share));
            } else {
                let _ = writeln!(out, "{:<6}{:>12}", row.letter, row.count);
            }
        }
        out.push_str("---\n");
        let _ = writeln!(out, "{:<6}{:>12}   ({} distinct)", "TOTAL", section.table.total(), section.table.len());
    }

    let summary = ctx.summary(report);
    out.push('\n');
    let _ = write!(out, "[count_chars] Completed: {} books, {} letters", summary.books, summary.letters);
    match summary.most_common {
        Some((letter, count)) => {
            let _ = writeln!(out, ", most common: {letter} ({count}).");
        }
        None => out.push_str(", no alphabet letters found.\n"),
    }
    out
}

pub(super) fn render_markdown(report: &Report, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    let ratio = ctx.output.ratio;

    for section in sections(report, ctx.output.mode) {
        let _ = writeln!(out, "### {}", escape_cell(&section.label));
        out.push('\n');
        if ratio {
            out.push_str("| Letter | Count | Share |\n|:---:|---:|---:|\n");
        } else {
            out.push_str("| Letter | Count |\n|:---:|---:|\n");
        }
        for row in ctx.rows(section.table) {
            if ratio {
                let _ = writeln!(out, "| {} | {} | {} |", row.letter, row.count, format_share(row.share));
            } else {
                let _ = writeln!(out, "| {} | {} |", row.letter, row.count);
            }
        }
        if ratio {
            let total = section.table.total();
            let share = if total.is_zero() { "0.00%" } else { "100.00%" };
            let _ = writeln!(out, "| **Total** | {total} | {share} |");
        } else {
            let _ = writeln!(out, "| **Total** | {} |", section.table.total());
        }
        out.push('\n');
    }
    out
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
