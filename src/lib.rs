pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, KataCommand};
pub use config::KataConfig;

pub use crate::core::{
    anagram::{anagram_report, frequency_map, is_anagram, Anagram},
    digits::{largest_digit, LargestDigit},
    engine::KataEngine,
    tens::{propagate_multiples_of_ten, PropagateTens},
    words::{reverse_words, ReverseWords},
};
pub use domain::model::{AnagramInput, AnagramReport, FrequencyMap, OutputFormat};
pub use domain::ports::Kata;
pub use utils::error::{KataError, Result};
