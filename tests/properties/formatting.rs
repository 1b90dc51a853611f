//! Property-based testing for formatting, validation, caret, and paste operations.
//!
//! Uses proptest to generate digit strings, arbitrary field text, and codes
//! drawn from the standard table plus a few unknown ones.

use phone_field::number::{adjust_caret, char_len, extract_prefix, split_prefix};
use phone_field::{RuleTable, format_number, is_valid, raw_digits};
use proptest::prelude::*;

/// Strategy for codes: every standard code plus unknown and malformed ones
fn code_strategy() -> impl Strategy<Value = String> {
    let mut codes: Vec<String> = RuleTable::standard()
        .codes()
        .map(|code| code.to_string())
        .collect();
    codes.extend(["+999", "+0", "", "44"].map(String::from));
    prop::sample::select(codes)
}

/// Strategy for text a user might type or paste into the field
fn field_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[0-9 ()+\-.a-z]{0,24}").unwrap()
}

prop_compose! {
    fn digits_strategy()(digits in prop::string::string_regex("[0-9]{0,20}").unwrap()) -> String {
        digits
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_format_keeps_digits_in_order(digits in digits_strategy(), code in code_strategy()) {
        let formatted = format_number(&digits, &code);
        let capacity = RuleTable::standard()
            .template(&code)
            .max_digits()
            .unwrap_or(usize::MAX);
        let expected: String = digits.chars().take(capacity).collect();
        prop_assert_eq!(raw_digits(&formatted), expected);
    }

    #[test]
    fn prop_format_is_idempotent(text in field_text_strategy(), code in code_strategy()) {
        let once = format_number(&text, &code);
        prop_assert_eq!(format_number(&once, &code), once);
    }

    #[test]
    fn prop_format_output_has_no_foreign_characters(text in field_text_strategy(), code in code_strategy()) {
        let formatted = format_number(&text, &code);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || "() -".contains(c)));
        prop_assert!(!formatted.ends_with(' '));
    }

    #[test]
    fn prop_validity_depends_only_on_digits(text in field_text_strategy(), code in code_strategy()) {
        let range = RuleTable::standard().digit_range(&code);
        let count = raw_digits(&text).len();
        prop_assert_eq!(is_valid(&text, &code), range.contains(count));
        prop_assert_eq!(is_valid(&text, &code), is_valid(&raw_digits(&text), &code));
    }

    #[test]
    fn prop_caret_stays_in_bounds(old_caret in 0usize..40, old_len in 0usize..40, new_len in 0usize..40) {
        let caret = adjust_caret(old_caret, old_len, new_len);
        prop_assert!(caret <= new_len);
        if old_caret + new_len >= old_len && old_caret + new_len - old_len <= new_len {
            prop_assert_eq!(caret, old_caret + new_len - old_len);
        }
    }

    #[test]
    fn prop_caret_after_reformat_is_within_field(text in field_text_strategy(), caret in 0usize..30, code in code_strategy()) {
        let caret = caret.min(char_len(&text));
        let formatted = format_number(&text, &code);
        let adjusted = adjust_caret(caret, char_len(&text), char_len(&formatted));
        prop_assert!(adjusted <= char_len(&formatted));
    }

    #[test]
    fn prop_prefix_rest_is_trimmed(text in field_text_strategy()) {
        if let Some((candidate, rest)) = split_prefix(&text) {
            prop_assert!(candidate.starts_with('+'));
            prop_assert!(candidate[1..].chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!rest.starts_with(char::is_whitespace));
        }
        if let Some(matched) = extract_prefix(&text) {
            prop_assert!(RuleTable::standard().contains(matched.code.as_str()));
            prop_assert!(text.starts_with(matched.code.as_str()));
            prop_assert!(!matched.rest.starts_with(char::is_whitespace));
        }
    }
}
