use std::{
    collections::HashMap,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

use crate::{alphabet::Alphabet, value_objects::CharCount};

/// Mapping from letter to number of occurrences.
///
/// Letters that never occurred are absent rather than stored as zero, so two
/// tables compare equal exactly when they saw the same letters the same number
/// of times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<char, CharCount>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every alphabet letter in `text`, case-insensitively.
    pub fn from_text(text: &str, alphabet: &Alphabet) -> Self {
        let mut table = Self::new();
        table.tally_line(text, alphabet);
        table
    }

    /// Lower-case `line` and record each character that belongs to `alphabet`.
    pub fn tally_line(&mut self, line: &str, alphabet: &Alphabet) {
        for ch in line.chars().flat_map(char::to_lowercase) {
            if alphabet.contains(ch) {
                self.record(ch);
            }
        }
    }

    #[inline]
    pub fn record(&mut self, letter: char) {
        self.counts.entry(letter).or_default().increment();
    }

    /// Add `count` occurrences of `letter`. Adding zero leaves the letter absent.
    pub fn add_count(&mut self, letter: char, count: CharCount) {
        if count.is_zero() {
            return;
        }
        let slot = self.counts.entry(letter).or_default();
        *slot = slot.saturating_add_count(count);
    }

    /// Occurrences of `letter`; zero when it never occurred.
    pub fn count(&self, letter: char) -> CharCount {
        self.counts.get(&letter).copied().unwrap_or_default()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Key-wise addition of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (&letter, &count) in &other.counts {
            self.add_count(letter, count);
        }
    }

    /// Sum of all letter counts.
    pub fn total(&self) -> CharCount {
        self.counts.values().sum()
    }

    /// Number of distinct letters seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Unordered iteration over present letters.
    pub fn iter(&self) -> impl Iterator<Item = (char, CharCount)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Fraction of all counted letters that are `letter`, in `0.0..=1.0`.
    pub fn share(&self, letter: char) -> f64 {
        let total = self.total().value();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = self.count(letter).value() as f64 / total as f64;
        share
    }

    /// Present letters in alphabet order.
    ///
    /// Letters outside `alphabet` (possible after merging tables built with a
    /// different alphabet) follow, ordered by code point.
    pub fn in_alphabet_order(&self, alphabet: &Alphabet) -> Vec<(char, CharCount)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by_key(|&(letter, _)| (alphabet.position(letter).unwrap_or(usize::MAX), letter));
        rows
    }

    /// Every alphabet letter in order, zero where absent, followed by any
    /// present non-member letters.
    pub fn with_zeros(&self, alphabet: &Alphabet) -> Vec<(char, CharCount)> {
        let mut rows: Vec<_> = alphabet.iter().map(|letter| (letter, self.count(letter))).collect();
        let mut strays: Vec<_> = self.iter().filter(|&(letter, _)| !alphabet.contains(letter)).collect();
        strays.sort_by_key(|&(letter, _)| letter);
        rows.extend(strays);
        rows
    }
}

impl AddAssign<&FrequencyTable> for FrequencyTable {
    fn add_assign(&mut self, rhs: &FrequencyTable) {
        self.merge(rhs);
    }
}

impl AddAssign for FrequencyTable {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for FrequencyTable {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for FrequencyTable {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a FrequencyTable> for FrequencyTable {
    fn sum<I: Iterator<Item = &'a FrequencyTable>>(iter: I) -> Self {
        let mut total = Self::new();
        for table in iter {
            total += table;
        }
        total
    }
}

impl FromIterator<(char, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (letter, count) in iter {
            table.add_count(letter, CharCount::new(count));
        }
        table
    }
}
