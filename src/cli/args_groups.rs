// src/cli/args_groups.rs
//! Sub-structures for organizing CLI arguments into logical groups.

use std::path::PathBuf;

use clap::{ArgAction, Args};
use count_chars_domain::{AlphabetPreset, options::LetterOrder};

use super::{
    parsers,
    value_enum::{CliOutputFormat, CliOutputMode},
};

/// Which characters are counted and how input is decoded
#[derive(Args, Debug)]
pub struct AlphabetOptions {
    /// Built-in alphabet (russian, russian-basic)
    #[arg(long, global = true, default_value = "russian", help_heading = "Alphabet")]
    pub alphabet: AlphabetPreset,

    /// Custom alphabet given as its lowercase letters, e.g. "абвгд"
    #[arg(long, global = true, help_heading = "Alphabet")]
    pub letters: Option<String>,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long, global = true, help_heading = "Alphabet")]
    pub lossy: bool,
}

/// Output-related options
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Letter order: alpha (alphabet order) or count (most frequent first)
    #[arg(long, global = true, default_value = "alpha", help_heading = "Output")]
    pub sort: LetterOrder,

    /// Show only the first N letters after sorting
    #[arg(long, global = true, value_parser = parsers::parse_positive_usize, help_heading = "Output")]
    pub top: Option<usize>,

    /// Add a share column (% of all counted letters)
    #[arg(long, global = true, help_heading = "Output")]
    pub ratio: bool,

    /// Also list alphabet letters that never occurred
    #[arg(long, global = true, help_heading = "Output")]
    pub zeros: bool,

    /// Print every book or only the total
    #[arg(long, global = true, value_enum, default_value = "full", help_heading = "Output")]
    pub mode: CliOutputMode,

    /// Write the report to this file instead of stdout
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

/// Directory listing policy
#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListingOptions {
    /// Descend into subdirectories
    #[arg(long, short = 'r', help_heading = "Listing")]
    pub recursive: bool,

    /// Hand every entry to the counter, directories included (fails on them)
    #[arg(long, help_heading = "Listing")]
    pub all_entries: bool,

    /// Skip hidden entries
    #[arg(long, help_heading = "Listing")]
    pub no_hidden: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Listing")]
    pub follow: bool,

    /// Only count files with these extensions (comma separated or repeated)
    #[arg(long, value_delimiter = ',', value_parser = parsers::parse_extension, help_heading = "Listing")]
    pub ext: Vec<String>,

    /// Only count files whose name matches one of these globs
    #[arg(long, value_delimiter = ',', help_heading = "Listing")]
    pub include: Vec<String>,

    /// Skip files whose name matches one of these globs
    #[arg(long, value_delimiter = ',', help_heading = "Listing")]
    pub exclude: Vec<String>,
}

/// Log verbosity
#[derive(Args, Debug, Default)]
pub struct LoggingOptions {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
