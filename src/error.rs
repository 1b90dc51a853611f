//! Error types for phone field operations.
//!
//! Formatting never fails: unknown country codes and malformed paste prefixes
//! fall back silently. Errors only surface when loading rule tables, building
//! configuration, addressing unknown fields, or when a caller asks for the
//! detailed reason a number is invalid.

/// Main error type for phone field operations.
#[derive(Debug, thiserror::Error)]
pub enum PhoneFieldError {
    /// Digit-count validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rule table could not be loaded
    #[error("Rule table error: {0}")]
    RuleTable(#[from] RuleTableError),

    /// Field configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Country code token does not have the `+<1-3 digits>` shape
    #[error("Invalid country code '{code}': expected '+' followed by 1 to 3 digits")]
    InvalidCountryCode { code: String },

    /// No field is registered under the given key
    #[error("Phone field not found: {key}")]
    FieldNotFound { key: String },
}

/// Reasons a number fails the digit-count rule of its country.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input contains no digits at all
    #[error("Phone number for {code} contains no digits")]
    Empty { code: String },

    /// Fewer digits than the country's minimum
    #[error("Phone number for {code} has {actual} digits, expected at least {min}")]
    TooFewDigits {
        code: String,
        min: usize,
        actual: usize,
    },

    /// More digits than the country's maximum
    #[error("Phone number for {code} has {actual} digits, expected at most {max}")]
    TooManyDigits {
        code: String,
        max: usize,
        actual: usize,
    },
}

/// Errors raised while loading or extending a rule table.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    /// Table JSON could not be parsed
    #[error("Failed to parse rule table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Entry key is not a valid country code
    #[error("Invalid country code '{code}' in rule table")]
    InvalidCode { code: String },

    /// Digit range cannot be satisfied by any non-empty digit string
    #[error("Unsatisfiable digit range {min}..={max} for {code}")]
    InvalidRange {
        code: String,
        min: usize,
        max: usize,
    },

    /// Template pattern is malformed
    #[error("Invalid template '{pattern}': {reason}")]
    InvalidTemplate { pattern: String, reason: String },

    /// The same code appears twice
    #[error("Duplicate rule for country code {code}")]
    DuplicateCode { code: String },
}

/// Errors raised while validating a field configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A delay is outside the accepted window
    #[error("Invalid {setting}: {millis}ms exceeds the {limit_millis}ms limit")]
    DelayTooLong {
        setting: &'static str,
        millis: u128,
        limit_millis: u128,
    },
}

impl PhoneFieldError {
    /// Create an invalid country code error
    pub fn invalid_country_code(code: impl Into<String>) -> Self {
        Self::InvalidCountryCode { code: code.into() }
    }

    /// Create a field not found error
    pub fn field_not_found(key: impl Into<String>) -> Self {
        Self::FieldNotFound { key: key.into() }
    }
}

impl RuleTableError {
    /// Create an invalid template error
    pub fn invalid_template(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

// Result type aliases for convenience
pub type PhoneFieldResult<T> = Result<T, PhoneFieldError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RuleTableResult<T> = Result<T, RuleTableError>;
