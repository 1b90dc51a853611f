//! Pure number operations: formatting, validation, caret adjustment, and
//! paste-prefix extraction.
//!
//! Every function here is side-effect free apart from `trace`/`debug`
//! logging. The free functions use [`RuleTable::standard`]; the same
//! operations are available as methods on [`RuleTable`] for custom tables.
//!
//! ```rust
//! use phone_field::number::{adjust_caret, combined_number, extract_prefix, format_number, is_valid};
//!
//! assert_eq!(format_number("5551234567", "+1"), "(555) 123-4567");
//! assert!(is_valid("(555) 123-4567", "+1"));
//! assert_eq!(adjust_caret(3, 5, 9), 7);
//! assert_eq!(combined_number("+1", "(555) 123-4567"), "+15551234567");
//!
//! let pasted = extract_prefix("+44 20 7946 0958").unwrap();
//! assert_eq!(pasted.code.as_str(), "+44");
//! assert_eq!(pasted.rest, "20 7946 0958");
//! ```
//!
//! [`RuleTable`]: crate::rules::RuleTable
//! [`RuleTable::standard`]: crate::rules::RuleTable::standard

mod caret;
mod formatter;
mod paste;
mod validator;

pub use caret::{adjust_caret, char_len};
pub use formatter::format_number;
pub use paste::{PrefixMatch, extract_prefix, extract_prefix_with, split_prefix};
pub use validator::{check_number, is_valid};

/// Digit-only projection of any input; everything except ASCII `0-9` is dropped.
pub fn raw_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ASCII digits in the input.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// The canonical value handed to the rest of a form: code followed by raw digits.
pub fn combined_number(code: &str, value: &str) -> String {
    let mut combined = String::with_capacity(code.len() + value.len());
    combined.push_str(code);
    combined.extend(value.chars().filter(char::is_ascii_digit));
    combined
}
