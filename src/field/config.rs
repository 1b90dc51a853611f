//! Per-field configuration and its builder.
//!
//! Configuration controls the timing of the deferred paste pass and the error
//! transition, whether an empty field may show an error, and how pasted
//! country codes are recognised.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between a paste event and its reformatting pass.
pub const DEFAULT_PASTE_DELAY: Duration = Duration::from_millis(10);

/// Default duration of the error show/hide transition.
pub const DEFAULT_ERROR_TRANSITION: Duration = Duration::from_millis(200);

/// Upper bound accepted for either delay.
pub const MAX_DELAY: Duration = Duration::from_secs(1);

/// How a pasted `+<digits>` prefix is removed from the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PastePrefixPolicy {
    /// Strip the prefix and select its country only when the code is known.
    #[default]
    MatchedOnly,
    /// Strip any `+<digits>` run; select its country only when known.
    AlwaysStrip,
}

/// Which set of codes a pasted prefix is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KnownCodes {
    /// Codes offered by the host's country selector.
    #[default]
    SelectorOptions,
    /// Codes present in the rule table.
    RuleTable,
}

/// Configuration for one phone field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Delay before the paste pass runs, once the host has inserted the text.
    #[serde(with = "duration_millis")]
    pub paste_delay: Duration,

    /// Duration handed to the host for showing or hiding the error message.
    #[serde(with = "duration_millis")]
    pub error_transition: Duration,

    /// Keep the error hidden while the field holds no digits.
    pub suppress_empty_error: bool,

    pub paste_prefix_policy: PastePrefixPolicy,

    pub known_codes: KnownCodes,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            paste_delay: DEFAULT_PASTE_DELAY,
            error_transition: DEFAULT_ERROR_TRANSITION,
            suppress_empty_error: true,
            paste_prefix_policy: PastePrefixPolicy::MatchedOnly,
            known_codes: KnownCodes::SelectorOptions,
        }
    }
}

impl FieldConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> FieldConfigBuilder {
        FieldConfigBuilder::new()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_delay("paste delay", self.paste_delay)?;
        check_delay("error transition", self.error_transition)?;
        Ok(())
    }
}

fn check_delay(setting: &'static str, delay: Duration) -> Result<(), ConfigError> {
    if delay > MAX_DELAY {
        return Err(ConfigError::DelayTooLong {
            setting,
            millis: delay.as_millis(),
            limit_millis: MAX_DELAY.as_millis(),
        });
    }
    Ok(())
}

/// Fluent builder for [`FieldConfig`].
///
/// # Examples
///
/// ```rust
/// use phone_field::field::{FieldConfig, PastePrefixPolicy};
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FieldConfig::builder()
///     .with_paste_delay(Duration::from_millis(25))
///     .with_paste_prefix_policy(PastePrefixPolicy::AlwaysStrip)
///     .build()?;
/// assert_eq!(config.paste_delay, Duration::from_millis(25));
///
/// let too_slow = FieldConfig::builder()
///     .with_error_transition(Duration::from_secs(5))
///     .build();
/// assert!(too_slow.is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldConfigBuilder {
    config: FieldConfig,
}

impl FieldConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paste_delay(mut self, delay: Duration) -> Self {
        self.config.paste_delay = delay;
        self
    }

    pub fn with_error_transition(mut self, transition: Duration) -> Self {
        self.config.error_transition = transition;
        self
    }

    /// Show the error even when the field holds no digits.
    pub fn show_empty_error(mut self) -> Self {
        self.config.suppress_empty_error = false;
        self
    }

    pub fn with_paste_prefix_policy(mut self, policy: PastePrefixPolicy) -> Self {
        self.config.paste_prefix_policy = policy;
        self
    }

    pub fn with_known_codes(mut self, known: KnownCodes) -> Self {
        self.config.known_codes = known;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<FieldConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
