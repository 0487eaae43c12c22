use crate::core::{AnagramInput, AnagramReport, FrequencyMap, Kata};
use crate::utils::error::Result;

/// Counts every character of `s`. Whitespace and case are significant.
pub fn frequency_map(s: &str) -> FrequencyMap {
    s.chars().collect()
}

pub fn is_anagram(a: &str, b: &str) -> bool {
    frequency_map(a) == frequency_map(b)
}

/// Like [`is_anagram`], but keeps both frequency maps for inspection.
pub fn anagram_report(a: &str, b: &str) -> AnagramReport {
    let left = frequency_map(a);
    let right = frequency_map(b);
    let is_anagram = left == right;

    AnagramReport {
        left,
        right,
        is_anagram,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Anagram;

impl Kata for Anagram {
    type Input = AnagramInput;
    type Output = AnagramReport;

    fn name(&self) -> &'static str {
        "anagram"
    }

    fn solve(&self, input: &AnagramInput) -> Result<AnagramReport> {
        let report = anagram_report(&input.left, &input.right);
        tracing::debug!(
            "Compared {} distinct chars against {}",
            report.left.len(),
            report.right.len()
        );
        Ok(report)
    }

    fn render(&self, output: &AnagramReport) -> String {
        format!("{}\n{}\n{}", output.left, output.right, output.is_anagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_anagram_listen_silent() {
        assert!(is_anagram("listen", "silent"));
        assert!(!is_anagram("listen", "listens"));
    }

    #[test]
    fn test_is_anagram_is_case_and_space_sensitive() {
        assert!(!is_anagram("Listen", "silent"));
        assert!(!is_anagram("a b", "ab"));
        assert!(is_anagram("a b", "b a"));
    }

    #[test]
    fn test_is_anagram_empty_strings() {
        assert!(is_anagram("", ""));
        assert!(!is_anagram("", " "));
    }

    #[test]
    fn test_anagram_report_keeps_maps() {
        let report = anagram_report("aab", "abb");
        assert!(!report.is_anagram);
        assert_eq!(report.left.count('a'), 2);
        assert_eq!(report.right.count('b'), 2);
    }

    #[test]
    fn test_render_prints_maps_then_verdict() {
        let kata = Anagram;
        let input = AnagramInput {
            left: "listen".to_string(),
            right: "silent".to_string(),
        };
        let report = kata.solve(&input).unwrap();
        assert_eq!(
            kata.render(&report),
            "{e=1, i=1, l=1, n=1, s=1, t=1}\n{e=1, i=1, l=1, n=1, s=1, t=1}\ntrue"
        );
    }
}
