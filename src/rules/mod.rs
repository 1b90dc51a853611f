//! Country rules: calling codes, digit-count ranges, and formatting templates.
//!
//! The rule table is read-only input to every formatting and validation call.
//! The built-in table covers 30 calling codes; codes outside the table fall
//! back to a 7–15 digit range and generic three-digit grouping.

mod country_code;
pub mod embedded;
mod table;
mod template;

pub use country_code::{CountryCode, MAX_CODE_DIGITS};
pub use table::{DigitRange, RuleEntry, RuleTable};
pub use template::{
    DIGIT_SLOT, FormatTemplate, GENERIC_GROUP_SIZE, GENERIC_SEPARATOR, TemplateGroup,
};
