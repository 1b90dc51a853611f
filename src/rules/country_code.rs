//! CountryCode value object for calling-code tokens.
//!
//! This module provides a type-safe wrapper around country calling codes such as
//! `+1` or `+971`. Codes are validated at construction time so rule tables and
//! paste matches can only ever carry well-formed tokens.

use crate::error::{PhoneFieldError, PhoneFieldResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Maximum number of digits in a calling code.
pub const MAX_CODE_DIGITS: usize = 3;

/// A validated country calling code.
///
/// ## Validation Rules
///
/// - Must start with `+`
/// - Must be followed by 1 to 3 ASCII digits and nothing else
///
/// ## Examples
///
/// ```rust
/// use phone_field::rules::CountryCode;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let code = CountryCode::new("+44")?;
///     assert_eq!(code.as_str(), "+44");
///     assert_eq!(code.digits(), "44");
///
///     assert!(CountryCode::new("44").is_err());
///     assert!(CountryCode::new("+4420").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new CountryCode with validation.
    pub fn new(value: impl Into<String>) -> PhoneFieldResult<Self> {
        let value = value.into();
        if Self::is_well_formed(&value) {
            Ok(Self(value))
        } else {
            Err(PhoneFieldError::invalid_country_code(value))
        }
    }

    /// Check whether a token has the `+<1-3 digits>` shape without allocating.
    pub fn is_well_formed(value: &str) -> bool {
        match value.strip_prefix('+') {
            Some(digits) => {
                (1..=MAX_CODE_DIGITS).contains(&digits.len())
                    && digits.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Get the string representation, including the leading `+`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the digits of the code without the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Consume the code and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq delegate to the inner String, so str lookups agree with owned keys.
impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = PhoneFieldError;

    fn try_from(value: &str) -> PhoneFieldResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = PhoneFieldError;

    fn try_from(value: String) -> PhoneFieldResult<Self> {
        Self::new(value)
    }
}
