use std::cmp::Reverse;

use crate::{
    alphabet::Alphabet,
    model::{DirectoryReport, FrequencyTable},
    value_objects::CharCount,
};

/// Headline numbers for a report footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub books: usize,
    pub letters: CharCount,
    pub distinct: usize,
    pub most_common: Option<(char, CharCount)>,
}

/// Combines tables and summarises the result.
pub struct Aggregator;

impl Aggregator {
    /// Element-wise sum of `tables`.
    pub fn aggregate<'a>(tables: impl IntoIterator<Item = &'a FrequencyTable>) -> FrequencyTable {
        tables.into_iter().sum()
    }

    pub fn summarize_table(table: &FrequencyTable, alphabet: &Alphabet, books: usize) -> Summary {
        Summary {
            books,
            letters: table.total(),
            distinct: table.len(),
            most_common: most_common(table, alphabet),
        }
    }

    pub fn summarize(report: &DirectoryReport, alphabet: &Alphabet) -> Summary {
        Self::summarize_table(&report.total, alphabet, report.book_count())
    }
}

fn most_common(table: &FrequencyTable, alphabet: &Alphabet) -> Option<(char, CharCount)> {
    table
        .in_alphabet_order(alphabet)
        .into_iter()
        .enumerate()
        .max_by_key(|&(idx, (_, count))| (count, Reverse(idx)))
        .map(|(_, pair)| pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookReport;

    #[test]
    fn aggregates_tables_key_wise() {
        let first: FrequencyTable = [('а', 2)].into_iter().collect();
        let second: FrequencyTable = [('а', 1), ('б', 1)].into_iter().collect();
        let total = Aggregator::aggregate([&first, &second]);
        let expected: FrequencyTable = [('а', 3), ('б', 1)].into_iter().collect();
        assert_eq!(total, expected);
    }

    #[test]
    fn summary_picks_earliest_letter_on_tie() {
        let alphabet = Alphabet::russian();
        let report = DirectoryReport::from_books(
            "text",
            vec![
                BookReport::new("one.txt", [('в', 3), ('б', 1)].into_iter().collect()),
                BookReport::new("two.txt", [('б', 2)].into_iter().collect()),
            ],
        );
        let summary = Aggregator::summarize(&report, &alphabet);
        assert_eq!(summary.books, 2);
        assert_eq!(summary.letters, 6usize);
        assert_eq!(summary.distinct, 2);
        assert_eq!(summary.most_common, Some(('б', CharCount::new(3))));
    }

    #[test]
    fn empty_table_has_no_most_common() {
        let summary = Aggregator::summarize_table(&FrequencyTable::new(), &Alphabet::russian(), 0);
        assert_eq!(summary.most_common, None);
        assert!(summary.letters.is_zero());
    }
}
