// domain analytics: ordering letters for presentation
use std::cmp::Reverse;

use crate::{alphabet::Alphabet, model::FrequencyTable, options::LetterOrder, value_objects::CharCount};

/// One presented row: a letter, its count and its share of the table total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterRow {
    pub letter: char,
    pub count: CharCount,
    pub share: f64,
}

/// Knobs controlling [`rank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    pub order: LetterOrder,
    pub top: Option<usize>,
    pub zeros: bool,
}

/// Turn a table into ordered rows.
///
/// `zeros` lists every alphabet letter, including absent ones. `top` is
/// applied after sorting.
pub fn rank(table: &FrequencyTable, alphabet: &Alphabet, options: RankOptions) -> Vec<LetterRow> {
    let pairs = if options.zeros { table.with_zeros(alphabet) } else { table.in_alphabet_order(alphabet) };

    let mut rows: Vec<LetterRow> = pairs
        .into_iter()
        .map(|(letter, count)| LetterRow { letter, count, share: table.share(letter) })
        .collect();

    if options.order == LetterOrder::Count {
        // stable: equal counts stay in alphabet order
        rows.sort_by_key(|row| Reverse(row.count));
    }
    if let Some(n) = options.top {
        rows.truncate(n);
    }
    rows
}
