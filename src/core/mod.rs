pub mod anagram;
pub mod digits;
pub mod engine;
pub mod tens;
pub mod words;

pub use crate::domain::model::{AnagramInput, AnagramReport, FrequencyMap, OutputFormat};
pub use crate::domain::ports::Kata;
pub use crate::utils::error::Result;
