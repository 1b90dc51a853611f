//! Country-aware phone number formatting for form fields.
//!
//! Formats a phone number as the user types, validates its digit count
//! against the selected country calling code, keeps the caret on the same
//! digit across reformatting, and recognises a country code at the start of
//! pasted text.
//!
//! # Core Components
//!
//! - [`RuleTable`] - Calling codes mapped to digit ranges and templates
//! - [`number`] - Pure operations: [`format_number`], [`is_valid`],
//!   [`adjust_caret`], [`extract_prefix`]
//! - [`FieldController`] - Runs the pipeline for one field through a
//!   [`PhoneFieldHost`]
//! - [`PhoneFieldRegistry`] - Explicit init/teardown for many fields
//!
//! # Quick Start
//!
//! ```rust
//! use phone_field::{format_number, is_valid, extract_prefix};
//!
//! assert_eq!(format_number("5551234567", "+1"), "(555) 123-4567");
//! assert!(is_valid("98765 43210", "+91"));
//!
//! let pasted = extract_prefix("+44 20 7946 0958").unwrap();
//! assert_eq!(format_number(&pasted.rest, pasted.code.as_str()), "2079 460 958");
//! ```
//!
//! Validation is a digit-count approximation per country, not numbering-plan
//! aware parsing.

pub mod error;
pub mod field;
pub mod number;
pub mod rules;

// Re-export commonly used types for convenience
pub use error::{PhoneFieldError, PhoneFieldResult, ValidationError, ValidationResult};
pub use field::{
    FieldConfig, FieldController, FieldEvent, FieldSnapshot, InMemoryField, PhoneFieldHost,
    PhoneFieldRegistry,
};
pub use number::{
    PrefixMatch, adjust_caret, combined_number, digit_count, extract_prefix, format_number,
    is_valid, raw_digits,
};
pub use rules::{CountryCode, DigitRange, FormatTemplate, RuleEntry, RuleTable};
