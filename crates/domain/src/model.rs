pub mod frequency_table;
pub mod report;

pub use frequency_table::FrequencyTable;
pub use report::{BookReport, DirectoryReport};
