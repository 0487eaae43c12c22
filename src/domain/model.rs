use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Character-to-count table for one input string.
///
/// Keys are kept in ascending character order so two maps render identically
/// when they hold the same counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap(BTreeMap<char, usize>);

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, c: char) {
        *self.0.entry(c).or_insert(0) += 1;
    }

    pub fn count(&self, c: char) -> usize {
        self.0.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, i.e. the length of the source string in chars.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<char> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for c in iter {
            map.add(c);
        }
        map
    }
}

impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (c, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", c, n)?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramReport {
    pub left: FrequencyMap,
    pub right: FrequencyMap,
    pub is_anagram: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramInput {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
