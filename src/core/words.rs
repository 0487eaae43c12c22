use crate::core::Kata;
use crate::utils::error::Result;

/// Reverses the characters of every space-separated word, keeping word order
/// and every separator. Empty tokens from repeated spaces stay empty.
pub fn reverse_words(sentence: &str) -> String {
    sentence
        .split(' ')
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseWords;

impl Kata for ReverseWords {
    type Input = str;
    type Output = String;

    fn name(&self) -> &'static str {
        "reverse-words"
    }

    fn solve(&self, input: &str) -> Result<String> {
        let reversed = reverse_words(input);
        tracing::debug!("Reversed {} words", input.split(' ').count());
        Ok(reversed)
    }

    fn render(&self, output: &String) -> String {
        output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_words_sentence() {
        assert_eq!(
            reverse_words("java developer full stack"),
            "avaj repoleved lluf kcats"
        );
    }

    #[test]
    fn test_reverse_words_empty_and_single() {
        assert_eq!(reverse_words(""), "");
        assert_eq!(reverse_words("a"), "a");
        assert_eq!(reverse_words("rust"), "tsur");
    }

    #[test]
    fn test_reverse_words_keeps_separators() {
        assert_eq!(reverse_words("ab  cd"), "ba  dc");
        assert_eq!(reverse_words(" ab "), " ba ");
        assert_eq!(reverse_words("   "), "   ");
    }

    #[test]
    fn test_reverse_words_multibyte() {
        assert_eq!(reverse_words("héllo wörld"), "olléh dlröw");
    }
}
