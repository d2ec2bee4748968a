mod args;
mod args_groups;
mod parsers;
mod value_enum;

pub use args::{Args, CommandArgs};
pub use args_groups::{AlphabetOptions, ListingOptions, LoggingOptions, OutputOptions};
use clap::Parser;
use count_chars_domain::{
    Alphabet,
    analytics::RankOptions,
    options::{DecodePolicy, EntryPolicy},
};
use count_chars_ports::filesystem::ListingPlan;
use count_chars_shared_kernel::{PresentationError, Result};

use crate::config::{Command, Config, ConfigBuilder, OutputConfigBuilder};

fn resolve_alphabet(options: &AlphabetOptions) -> Result<(Alphabet, String)> {
    match &options.letters {
        Some(letters) => {
            let alphabet = Alphabet::new(letters).map_err(|err| PresentationError::InvalidValue {
                flag: "--letters".to_string(),
                value: letters.clone(),
                reason: err.to_string(),
            })?;
            Ok((alphabet, "custom".to_string()))
        }
        None => Ok((options.alphabet.alphabet(), options.alphabet.name().to_string())),
    }
}

fn make_listing_plan(dir: &std::path::Path, listing: &ListingOptions) -> ListingPlan {
    ListingPlan {
        root: dir.to_path_buf(),
        entries: if listing.all_entries { EntryPolicy::All } else { EntryPolicy::RegularFiles },
        recursive: listing.recursive,
        include_hidden: !listing.no_hidden,
        follow_links: listing.follow,
        extensions: listing.ext.clone(),
        include_patterns: listing.include.clone(),
        exclude_patterns: listing.exclude.clone(),
    }
}

fn make_command(args: &Args) -> Command {
    match &args.command {
        CommandArgs::Book { name, base_dir } => Command::Book { name: name.clone(), base_dir: base_dir.clone() },
        CommandArgs::Dir { dir, listing } => Command::Directory { plan: make_listing_plan(dir, listing) },
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<(Config, LoggingOptions)> {
    let args = Args::parse();
    let config = build_config(&args)?;
    Ok((config, args.logging))
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when a custom alphabet is invalid or the builders reject
/// the assembled options.
pub fn build_config(args: &Args) -> Result<Config> {
    let (alphabet, alphabet_name) = resolve_alphabet(&args.alphabet)?;
    let decode = if args.alphabet.lossy { DecodePolicy::Lossy } else { DecodePolicy::Strict };

    let output = OutputConfigBuilder::default()
        .format(args.output.format)
        .mode(args.output.mode)
        .rank(RankOptions { order: args.output.sort, top: args.output.top, zeros: args.output.zeros })
        .ratio(args.output.ratio)
        .path(args.output.output.clone())
        .build()
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))?;

    let config = ConfigBuilder::default()
        .command(make_command(args))
        .alphabet(alphabet)
        .alphabet_name(alphabet_name)
        .decode(decode)
        .output(output)
        .build()
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))?;
    Ok(config)
}
