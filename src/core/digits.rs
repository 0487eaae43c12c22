use crate::core::Kata;
use crate::utils::error::{KataError, Result};

/// Largest decimal digit of `n`, found by peeling digits off with `% 10`.
///
/// Zero has the single digit 0. Negative numbers are rejected.
pub fn largest_digit(n: i32) -> Result<u8> {
    if n < 0 {
        return Err(KataError::NegativeInput { value: n });
    }

    let mut rest = n;
    let mut largest: Option<u8> = None;
    while rest > 0 {
        let digit = (rest % 10) as u8;
        largest = Some(largest.map_or(digit, |current| current.max(digit)));
        rest /= 10;
    }

    Ok(largest.unwrap_or(0))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LargestDigit;

impl Kata for LargestDigit {
    type Input = i32;
    type Output = u8;

    fn name(&self) -> &'static str {
        "largest-digit"
    }

    fn solve(&self, input: &i32) -> Result<u8> {
        largest_digit(*input)
    }

    fn render(&self, output: &u8) -> String {
        output.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_digit_examples() {
        assert_eq!(largest_digit(10).unwrap(), 1);
        assert_eq!(largest_digit(7).unwrap(), 7);
        assert_eq!(largest_digit(3918).unwrap(), 9);
        assert_eq!(largest_digit(4821).unwrap(), 8);
        assert_eq!(largest_digit(1090).unwrap(), 9);
        assert_eq!(largest_digit(i32::MAX).unwrap(), 8);
    }

    #[test]
    fn test_largest_digit_of_zero_is_zero() {
        assert_eq!(largest_digit(0).unwrap(), 0);
    }

    #[test]
    fn test_largest_digit_rejects_negative() {
        match largest_digit(-5) {
            Err(KataError::NegativeInput { value }) => assert_eq!(value, -5),
            other => panic!("expected NegativeInput, got {:?}", other),
        }
        assert!(largest_digit(i32::MIN).is_err());
    }
}
