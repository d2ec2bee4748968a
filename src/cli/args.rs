// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use count_chars_usecase::DEFAULT_BASE_DIR;

use super::args_groups::{AlphabetOptions, ListingOptions, LoggingOptions, OutputOptions};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_chars",
    version = crate::VERSION,
    about = "Count Cyrillic letter frequencies in text files"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: CommandArgs,

    #[command(flatten)]
    pub alphabet: AlphabetOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

#[derive(Subcommand, Debug)]
pub enum CommandArgs {
    /// Count the letters of one book, named relative to the base directory
    Book {
        /// File name under the base directory
        #[arg(value_hint = ValueHint::FilePath)]
        name: PathBuf,

        /// Directory book names are resolved against
        #[arg(long, default_value = DEFAULT_BASE_DIR, value_hint = ValueHint::DirPath)]
        base_dir: PathBuf,
    },
    /// Count the letters of every book in a directory and sum them
    Dir {
        /// Directory to list
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        #[command(flatten)]
        listing: ListingOptions,
    },
}
