use proptest::prelude::*;
use small_kata::{is_anagram, largest_digit, propagate_multiples_of_ten, reverse_words};

proptest! {
    #[test]
    fn test_reverse_words_is_self_inverse(s in "[a-zA-Z0-9 éß]{0,40}") {
        prop_assert_eq!(reverse_words(&reverse_words(&s)), s);
    }

    #[test]
    fn test_reverse_words_keeps_length_and_spaces(s in "[a-z ]{0,40}") {
        let reversed = reverse_words(&s);
        prop_assert_eq!(reversed.len(), s.len());
        prop_assert_eq!(reversed.matches(' ').count(), s.matches(' ').count());
    }

    #[test]
    fn test_is_anagram_symmetric(a in "[a-c ]{0,8}", b in "[a-c ]{0,8}") {
        prop_assert_eq!(is_anagram(&a, &b), is_anagram(&b, &a));
    }

    #[test]
    fn test_is_anagram_reflexive(a in ".{0,20}") {
        prop_assert!(is_anagram(&a, &a));
    }

    #[test]
    fn test_is_anagram_of_reversed(a in ".{0,20}") {
        let reversed: String = a.chars().rev().collect();
        prop_assert!(is_anagram(&a, &reversed));
    }

    #[test]
    fn test_largest_digit_matches_decimal_form(n in 1i32..=i32::MAX) {
        let expected = n
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .max()
            .unwrap_or(0) as u8;
        prop_assert_eq!(largest_digit(n).unwrap(), expected);
    }

    #[test]
    fn test_largest_digit_rejects_all_negatives(n in i32::MIN..0) {
        prop_assert!(largest_digit(n).is_err());
    }

    #[test]
    fn test_propagate_keeps_length(values in proptest::collection::vec(-1000i32..1000, 0..50)) {
        let output = propagate_multiples_of_ten(&values);
        prop_assert_eq!(output.len(), values.len());
    }

    #[test]
    fn test_propagate_slots_are_input_or_carry(values in proptest::collection::vec(-1000i32..1000, 0..50)) {
        let output = propagate_multiples_of_ten(&values);
        let mut last_ten: Option<i32> = None;
        for (input, out) in values.iter().zip(&output) {
            if input % 10 == 0 {
                last_ten = Some(*input);
                prop_assert_eq!(out, input);
            } else {
                prop_assert_eq!(*out, last_ten.unwrap_or(*input));
            }
        }
    }
}
