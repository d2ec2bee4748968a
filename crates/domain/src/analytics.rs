pub mod aggregate;
pub mod sort;

pub use aggregate::{Aggregator, Summary};
pub use sort::{LetterRow, RankOptions, rank};
