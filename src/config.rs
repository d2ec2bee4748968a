// src/config.rs
use std::path::PathBuf;

use count_chars_domain::{
    Alphabet,
    analytics::RankOptions,
    options::{DecodePolicy, OutputFormat, OutputMode},
};
use count_chars_ports::filesystem::ListingPlan;
use derive_builder::Builder;

/// What to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One book, resolved under `base_dir`.
    Book { name: PathBuf, base_dir: PathBuf },
    /// Every book `plan` selects.
    Directory { plan: ListingPlan },
}

/// How the report is rendered and where it goes.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct OutputConfig {
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub mode: OutputMode,
    #[builder(default)]
    pub rank: RankOptions,
    #[builder(default)]
    pub ratio: bool,
    #[builder(default)]
    pub path: Option<PathBuf>,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub command: Command,
    #[builder(default)]
    pub alphabet: Alphabet,
    /// Name shown in report headers: a preset name or `custom`.
    #[builder(default = "\"russian\".to_string()")]
    pub alphabet_name: String,
    #[builder(default)]
    pub decode: DecodePolicy,
    #[builder(default)]
    pub output: OutputConfig,
}
