// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use count_chars_infra::{DirectoryEnumerator, FileReader, FileWriter, LogProgress};
use count_chars_usecase::{CountBook, CountDirectory};
use log::debug;

use crate::{
    config::{Command, Config},
    presentation::{self, RenderContext, Report},
};

/// Count what `config.command` names, without rendering.
///
/// # Errors
///
/// Returns `Err` when a book cannot be read or decoded, or the directory
/// cannot be listed.
pub fn execute(config: &Config) -> count_chars_shared_kernel::Result<Report> {
    let reader = FileReader;
    match &config.command {
        Command::Book { name, base_dir } => {
            let counter = CountBook::new(&reader, &config.alphabet)
                .with_base_dir(base_dir)
                .with_decode(config.decode);
            counter.run(name).map(Report::Book)
        }
        Command::Directory { plan } => {
            let enumerator = DirectoryEnumerator::new();
            let progress = LogProgress;
            let counter = CountBook::new(&reader, &config.alphabet).with_decode(config.decode);
            CountDirectory::new(&enumerator, counter)
                .with_progress(&progress)
                .count_in_dir(plan)
                .map(Report::Directory)
        }
    }
}

/// Count, render and emit the report.
///
/// # Errors
///
/// Returns `Err` when counting, rendering or writing the report fails.
pub fn run(config: &Config) -> Result<()> {
    debug!("alphabet={} ({} letters), decode={:?}", config.alphabet_name, config.alphabet.len(), config.decode);
    let report = execute(config)?;

    let ctx = RenderContext {
        alphabet: &config.alphabet,
        alphabet_name: &config.alphabet_name,
        output: &config.output,
    };
    let rendered = presentation::render(&report, &ctx).context("failed to render report")?;

    match &config.output.path {
        Some(path) => FileWriter::write_report(path, &rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("failed to write report to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use count_chars_ports::filesystem::ListingPlan;
    use tempfile::tempdir;

    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn book_command_resolves_under_base_dir() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("a.txt"), "Ааб\nя").expect("write");
        let config = ConfigBuilder::default()
            .command(Command::Book { name: PathBuf::from("a.txt"), base_dir: dir.path().to_path_buf() })
            .build()
            .expect("config");

        let Report::Book(book) = execute(&config).expect("counted") else {
            panic!("expected book report");
        };
        assert_eq!(book.path, dir.path().join("a.txt"));
        assert_eq!(book.table.count('а'), 2);
        assert_eq!(book.table.count('я'), 1);
        assert_eq!(book.total(), 4);
    }

    #[test]
    fn directory_command_sums_books() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("a.txt"), "аа").expect("write");
        fs::write(dir.path().join("b.txt"), "аб").expect("write");
        let config = ConfigBuilder::default()
            .command(Command::Directory { plan: ListingPlan::new(dir.path()) })
            .build()
            .expect("config");

        let Report::Directory(report) = execute(&config).expect("counted") else {
            panic!("expected directory report");
        };
        assert_eq!(report.book_count(), 2);
        assert_eq!(report.total.count('а'), 3);
        assert_eq!(report.total.count('б'), 1);
    }

    #[test]
    fn missing_book_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let config = ConfigBuilder::default()
            .command(Command::Book { name: PathBuf::from("absent.txt"), base_dir: dir.path().to_path_buf() })
            .build()
            .expect("config");
        assert!(execute(&config).is_err());
    }
}
