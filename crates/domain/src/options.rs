// crates/domain/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

/// Whether per-book tables are printed or only the aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    #[default]
    Full,
    TotalOnly,
}

/// Order in which letters are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterOrder {
    /// Alphabet order.
    #[default]
    Alpha,
    /// Most frequent first; ties keep alphabet order.
    Count,
}

impl FromStr for LetterOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha" | "alphabet" => Ok(Self::Alpha),
            "count" | "freq" => Ok(Self::Count),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

/// Which directory entries are handed to the per-file counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPolicy {
    /// Only regular files; everything else is skipped.
    #[default]
    RegularFiles,
    /// Every entry, unfiltered. A subdirectory then fails as an unreadable book.
    All,
}

/// How bytes that are not valid UTF-8 are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Invalid UTF-8 is a read error.
    #[default]
    Strict,
    /// Invalid sequences become U+FFFD and are never counted.
    Lossy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_order_aliases() {
        assert_eq!(" Count ".parse::<LetterOrder>(), Ok(LetterOrder::Count));
        assert_eq!("alphabet".parse::<LetterOrder>(), Ok(LetterOrder::Alpha));
    }

    #[test]
    fn rejects_unknown_letter_order() {
        let err = "size".parse::<LetterOrder>().expect_err("unknown key should fail");
        assert!(err.contains("Unknown sort key"));
    }

    #[test]
    fn defaults_favour_safe_listing() {
        assert_eq!(EntryPolicy::default(), EntryPolicy::RegularFiles);
        assert_eq!(DecodePolicy::default(), DecodePolicy::Strict);
    }
}
