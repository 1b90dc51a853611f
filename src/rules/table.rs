//! Country rule table for loading, managing, and resolving per-country rules.
//!
//! The [`RuleTable`] maps calling codes to a digit-count range and an optional
//! formatting template. Lookups never fail from the caller's point of view:
//! [`RuleTable::digit_range`] and [`RuleTable::template`] fall back to the
//! permissive default range and the generic grouping for codes the table does
//! not know.

use super::{CountryCode, FormatTemplate, embedded};
use crate::error::{RuleTableError, RuleTableResult};
use log::{debug, error, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Inclusive digit-count constraint for a country.
///
/// Always satisfiable by a non-empty digit string: `1 <= max` and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitRange {
    min: usize,
    max: usize,
}

impl DigitRange {
    /// Range applied to codes without a rule.
    pub const DEFAULT: DigitRange = DigitRange { min: 7, max: 15 };

    /// Create a range, or `None` when no non-empty digit string satisfies it.
    pub fn new(min: usize, max: usize) -> Option<Self> {
        (min <= max && max >= 1).then_some(Self { min, max })
    }

    /// Create a range that accepts exactly `count` digits.
    pub fn exact(count: usize) -> Option<Self> {
        Self::new(count, count)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Check whether a digit count lies within the range.
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl Default for DigitRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} digits", self.min)
        } else {
            write!(f, "{}-{} digits", self.min, self.max)
        }
    }
}

/// Validation and formatting rule for one country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    code: CountryCode,
    country: String,
    digits: DigitRange,
    template: Option<FormatTemplate>,
}

impl RuleEntry {
    /// Create a rule. A `None` template selects the generic grouping.
    pub fn new(
        code: CountryCode,
        country: impl Into<String>,
        digits: DigitRange,
        template: Option<FormatTemplate>,
    ) -> Self {
        Self {
            code,
            country: country.into(),
            digits,
            template,
        }
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    /// Human-readable country name, suitable for selector labels.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn digits(&self) -> DigitRange {
        self.digits
    }

    /// Country-specific template, if any.
    pub fn template(&self) -> Option<&FormatTemplate> {
        self.template.as_ref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawRule {
    code: String,
    #[serde(default)]
    country: String,
    min_digits: usize,
    max_digits: usize,
    #[serde(default)]
    template: Option<String>,
}

impl RawRule {
    fn into_entry(self) -> RuleTableResult<RuleEntry> {
        let code = CountryCode::new(self.code.as_str()).map_err(|_| {
            RuleTableError::InvalidCode {
                code: self.code.clone(),
            }
        })?;

        let digits = DigitRange::new(self.min_digits, self.max_digits).ok_or_else(|| {
            RuleTableError::InvalidRange {
                code: self.code.clone(),
                min: self.min_digits,
                max: self.max_digits,
            }
        })?;

        let template = self
            .template
            .as_deref()
            .map(FormatTemplate::parse)
            .transpose()?;

        Ok(RuleEntry::new(code, self.country, digits, template))
    }
}

/// Read-only mapping from country code to [`RuleEntry`].
///
/// Entries keep their insertion order so [`RuleTable::entries`] can feed a
/// country selector directly.
///
/// ## Examples
///
/// ```rust
/// use phone_field::rules::{DigitRange, RuleTable};
///
/// let rules = RuleTable::standard();
/// assert_eq!(rules.digit_range("+1"), DigitRange::exact(10).unwrap());
/// assert_eq!(rules.digit_range("+999"), DigitRange::DEFAULT);
/// assert!(rules.lookup("+65").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    index: HashMap<CountryCode, usize>,
    fallback_template: FormatTemplate,
}

impl RuleTable {
    /// Create a table with no country rules; every code uses the fallbacks.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            fallback_template: FormatTemplate::generic(),
        }
    }

    /// The built-in 30-country table, parsed once per process.
    pub fn standard() -> &'static RuleTable {
        static STANDARD: LazyLock<RuleTable> = LazyLock::new(|| {
            RuleTable::from_json(embedded::standard_rules()).unwrap_or_else(|e| {
                error!(
                    "Embedded rule table failed to load, using fallback rules only: {}",
                    e
                );
                RuleTable::empty()
            })
        });
        &STANDARD
    }

    /// Load a table from JSON in the embedded table's format.
    ///
    /// Every entry is checked: the code must be well formed, the digit range
    /// satisfiable, the template parseable, and no code may appear twice.
    pub fn from_json(content: &str) -> RuleTableResult<Self> {
        let raw: RawTable = serde_json::from_str(content)?;
        let mut table = Self::empty();
        for rule in raw.rules {
            table.insert(rule.into_entry()?)?;
        }
        info!("Loaded rule table with {} country codes", table.len());
        Ok(table)
    }

    /// Add a rule, rejecting codes that already have one.
    pub fn insert(&mut self, entry: RuleEntry) -> RuleTableResult<()> {
        if self.index.contains_key(entry.code()) {
            return Err(RuleTableError::DuplicateCode {
                code: entry.code().to_string(),
            });
        }
        debug!(
            "Registering rule {} ({}): {}",
            entry.code(),
            entry.country(),
            entry.digits()
        );
        self.index.insert(entry.code().clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Get the rule for a code, if the table has one.
    pub fn lookup(&self, code: &str) -> Option<&RuleEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    /// Check whether the table has a rule for a code.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Digit range for a code, falling back to [`DigitRange::DEFAULT`].
    pub fn digit_range(&self, code: &str) -> DigitRange {
        self.lookup(code)
            .map(RuleEntry::digits)
            .unwrap_or(DigitRange::DEFAULT)
    }

    /// Template for a code, falling back to the generic grouping.
    pub fn template(&self, code: &str) -> &FormatTemplate {
        self.lookup(code)
            .and_then(RuleEntry::template)
            .unwrap_or(&self.fallback_template)
    }

    /// All rules in insertion order.
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// All codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.entries.iter().map(RuleEntry::code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::empty()
    }
}
