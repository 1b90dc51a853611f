//! Display formatting of phone numbers per country template.

use super::raw_digits;
use crate::rules::RuleTable;
use log::trace;

impl RuleTable {
    /// Format a value for display under a country code.
    ///
    /// The value is reduced to its digits first, so formatted output can be
    /// fed back in unchanged. Codes without a template use generic grouping.
    pub fn format(&self, value: &str, code: &str) -> String {
        let digits = raw_digits(value);
        let formatted = self.template(code).render(&digits);
        trace!(
            "Formatted {} digits for {} as '{}'",
            digits.len(),
            code,
            formatted
        );
        formatted
    }
}

/// Format a value with the standard rule table.
///
/// ```rust
/// use phone_field::number::format_number;
///
/// assert_eq!(format_number("5551234567", "+1"), "(555) 123-4567");
/// assert_eq!(format_number("9876543210", "+91"), "98765 43210");
/// assert_eq!(format_number("12345678", "+999"), "123 456 78");
/// assert_eq!(format_number("", "+44"), "");
/// ```
pub fn format_number(value: &str, code: &str) -> String {
    RuleTable::standard().format(value, code)
}
