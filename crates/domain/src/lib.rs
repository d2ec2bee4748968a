#![allow(clippy::multiple_crate_versions)]

pub mod alphabet;
pub mod analytics;
pub mod model;
pub mod options;
pub mod pattern;
pub mod value_objects;

pub use alphabet::{Alphabet, AlphabetPreset};
pub use model::{BookReport, DirectoryReport, FrequencyTable};
