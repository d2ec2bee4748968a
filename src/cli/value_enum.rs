// src/cli/value_enum.rs
use clap::ValueEnum;
use count_chars_domain::options::{OutputFormat, OutputMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Tsv => OutputFormat::Tsv,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Md => OutputFormat::Md,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliOutputMode {
    /// Every book, then the total
    #[default]
    Full,
    /// Only the aggregate
    TotalOnly,
}

impl From<CliOutputMode> for OutputMode {
    fn from(value: CliOutputMode) -> Self {
        match value {
            CliOutputMode::Full => OutputMode::Full,
            CliOutputMode::TotalOnly => OutputMode::TotalOnly,
        }
    }
}
