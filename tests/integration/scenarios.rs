//! End-to-end formatting and validation scenarios through the public API.

use crate::assert_formats;
use crate::assert_validation_error;
use crate::common::fixtures::{custom_rules_json, format_cases};
use phone_field::error::ValidationError;
use phone_field::number::{check_number, combined_number, raw_digits};
use phone_field::{RuleTable, format_number, is_valid};

#[test]
fn test_reference_format_cases() {
    for case in format_cases() {
        assert_formats!(case.value, case.code, case.formatted);
        assert_eq!(
            is_valid(case.formatted, case.code),
            case.valid,
            "validity of '{}' for {}",
            case.formatted,
            case.code
        );
    }
}

#[test]
fn test_us_scenario() {
    assert_formats!("5551234567", "+1", "(555) 123-4567");
    assert!(is_valid("(555) 123-4567", "+1"));

    assert_formats!("555123", "+1", "(555) 123");
    let expected = ValidationError::TooFewDigits {
        code: "+1".to_string(),
        min: 10,
        actual: 6,
    };
    assert_eq!(check_number("(555) 123", "+1"), Err(expected));
}

#[test]
fn test_unknown_code_uses_fallbacks() {
    assert_formats!("12345678", "+999", "123 456 78");
    assert!(is_valid("12345678", "+999"));
    assert!(!is_valid("123456", "+999"));
    assert_validation_error!(
        check_number("1234567890123456", "+999"),
        ValidationError::TooManyDigits { max: 15, .. }
    );
}

#[test]
fn test_empty_input() {
    for code in ["+1", "+44", "+91", "+999"] {
        assert_formats!("", code, "");
        assert!(!is_valid("", code));
        assert_validation_error!(check_number("", code), ValidationError::Empty { .. });
    }
}

#[test]
fn test_combined_number_from_formatted_value() {
    let formatted = format_number("20 7946 0958", "+44");
    assert_eq!(combined_number("+44", &formatted), "+442079460958");
    assert_eq!(raw_digits(&formatted), "2079460958");
}

#[test]
fn test_every_standard_country_accepts_its_minimum() {
    let rules = RuleTable::standard();
    for entry in rules.entries() {
        let range = entry.digits();
        let shortest = "5".repeat(range.min());
        let longest = "5".repeat(range.max());
        let code = entry.code().as_str();
        assert!(rules.is_valid(&shortest, code), "{} min", code);
        assert!(rules.is_valid(&longest, code), "{} max", code);
        assert!(
            !rules.is_valid(&"5".repeat(range.max() + 1), code),
            "{} over",
            code
        );

        // Formatting never loses digits a valid number needs
        let formatted = rules.format(&longest, code);
        assert!(
            rules.is_valid(&formatted, code),
            "{} formatted '{}'",
            code,
            formatted
        );
    }
}

#[test]
fn test_custom_rule_table() {
    let rules = RuleTable::from_json(custom_rules_json()).unwrap();
    assert_eq!(rules.format("612345678", "+33"), "6 12 34 56 78");
    assert!(rules.is_valid("6 12 34 56 78", "+33"));
    assert_eq!(rules.format("871234567", "+353"), "871 234 567");
    assert!(rules.is_valid("8712345", "+353"));
    // Codes outside the custom table fall back even if the standard table knows them
    assert_eq!(rules.format("5551234567", "+1"), "555 123 456 7");
}
