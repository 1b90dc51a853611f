//! Digit-count validation per country rule.

use super::digit_count;
use crate::error::{ValidationError, ValidationResult};
use crate::rules::RuleTable;

impl RuleTable {
    /// Check a value against the digit range for a code.
    ///
    /// Returns the digit count on success, or the reason the count falls
    /// outside the range. Only digits are counted, so formatted and raw input
    /// with the same digits always agree.
    pub fn check(&self, value: &str, code: &str) -> ValidationResult<usize> {
        let count = digit_count(value);
        let range = self.digit_range(code);
        if range.contains(count) {
            return Ok(count);
        }

        let code = code.to_string();
        Err(if count == 0 {
            ValidationError::Empty { code }
        } else if count < range.min() {
            ValidationError::TooFewDigits {
                code,
                min: range.min(),
                actual: count,
            }
        } else {
            ValidationError::TooManyDigits {
                code,
                max: range.max(),
                actual: count,
            }
        })
    }

    /// Whether a value has an acceptable digit count for a code.
    pub fn is_valid(&self, value: &str, code: &str) -> bool {
        self.check(value, code).is_ok()
    }
}

/// Validate a value with the standard rule table.
///
/// ```rust
/// use phone_field::number::is_valid;
///
/// assert!(is_valid("(555) 123-4567", "+1"));
/// assert!(!is_valid("(555) 123", "+1"));
/// assert!(is_valid("12345678", "+999"));
/// assert!(!is_valid("", "+1"));
/// ```
pub fn is_valid(value: &str, code: &str) -> bool {
    RuleTable::standard().is_valid(value, code)
}

/// Validate a value with the standard rule table, explaining failures.
pub fn check_number(value: &str, code: &str) -> ValidationResult<usize> {
    RuleTable::standard().check(value, code)
}
