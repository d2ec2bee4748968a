//! The counting domain: which characters are tallied, and in which order they
//! are presented.

use std::{collections::HashMap, fmt, str::FromStr};

use count_chars_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// The 33 lowercase letters of the Russian alphabet, in conventional order.
pub const RUSSIAN_LETTERS: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Built-in alphabets selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlphabetPreset {
    /// а..я plus ё.
    #[default]
    Russian,
    /// The contiguous range а..=я, without ё.
    RussianBasic,
}

impl AlphabetPreset {
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::Russian => Alphabet::russian(),
            Self::RussianBasic => Alphabet::russian_basic(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Russian => "russian",
            Self::RussianBasic => "russian-basic",
        }
    }
}

impl FromStr for AlphabetPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "russian" | "ru" => Ok(Self::Russian),
            "russian-basic" | "ru-basic" => Ok(Self::RussianBasic),
            other => Err(format!("Unknown alphabet: {other}")),
        }
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered set of lowercase characters.
///
/// Membership is what decides whether a character is counted at all; the
/// position of a letter is only used to order output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `letters`, keeping first
    /// occurrences in order.
    ///
    /// Whitespace is ignored so that letters can be given space-separated.
    /// Every letter must be its own lowercase form, since input is lower-cased
    /// before the membership check and an uppercase letter could never match.
    pub fn new(letters: &str) -> DomainResult<Self> {
        let mut ordered = Vec::new();
        let mut positions = HashMap::new();

        for ch in letters.chars().filter(|c| !c.is_whitespace()) {
            if !is_own_lowercase(ch) {
                return Err(DomainError::InvalidAlphabet {
                    reason: format!("'{ch}' is not a lowercase character"),
                });
            }
            if positions.contains_key(&ch) {
                continue;
            }
            positions.insert(ch, ordered.len());
            ordered.push(ch);
        }

        if ordered.is_empty() {
            return Err(DomainError::InvalidAlphabet { reason: "alphabet has no letters".to_string() });
        }

        Ok(Self { letters: ordered, positions })
    }

    pub fn russian() -> Self {
        Self::from_trusted(RUSSIAN_LETTERS.chars())
    }

    pub fn russian_basic() -> Self {
        Self::from_trusted('а'..='я')
    }

    fn from_trusted(letters: impl Iterator<Item = char>) -> Self {
        let letters: Vec<char> = letters.collect();
        let positions = letters.iter().enumerate().map(|(idx, &ch)| (ch, idx)).collect();
        Self { letters, positions }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.positions.contains_key(&ch)
    }

    /// Position of `ch` in alphabet order, if it is a member.
    #[inline]
    pub fn position(&self, ch: char) -> Option<usize> {
        self.positions.get(&ch).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

fn is_own_lowercase(ch: char) -> bool {
    let mut lower = ch.to_lowercase();
    lower.next() == Some(ch) && lower.next().is_none()
}
