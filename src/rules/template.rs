//! Formatting templates that turn raw digits into display strings.
//!
//! A template is either a fixed sequence of digit groups written as a pattern
//! such as `(DDD) DDD-DDDD`, or the generic repeating layout that splits digits
//! into runs of three. Both layouts only ever emit the digits they are given
//! (truncated to the slot count for fixed patterns) plus literal separators, so
//! rendering is idempotent once the output is stripped back to digits.

use crate::error::{RuleTableError, RuleTableResult};

/// Character that marks a digit slot in a template pattern.
pub const DIGIT_SLOT: char = 'D';

/// Group size used by the generic layout.
pub const GENERIC_GROUP_SIZE: usize = 3;

/// Separator used by the generic layout.
pub const GENERIC_SEPARATOR: &str = " ";

/// One run of digit slots plus the literal text written before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGroup {
    lead: String,
    len: usize,
}

impl TemplateGroup {
    /// Literal text preceding the group's digits.
    pub fn lead(&self) -> &str {
        &self.lead
    }

    /// Number of digit slots in the group.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the group has no digit slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Layout {
    Grouped(Vec<TemplateGroup>),
    Repeating { size: usize, separator: String },
}

/// Descriptor for rendering a country's numbers.
///
/// ## Examples
///
/// ```rust
/// use phone_field::rules::FormatTemplate;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let us = FormatTemplate::parse("(DDD) DDD-DDDD")?;
///     assert_eq!(us.render("555"), "555");
///     assert_eq!(us.render("555123"), "(555) 123");
///     assert_eq!(us.render("555123456789"), "(555) 123-4567");
///
///     let generic = FormatTemplate::generic();
///     assert_eq!(generic.render("12345678"), "123 456 78");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    layout: Layout,
}

impl FormatTemplate {
    /// Parse a pattern where each `D` is a digit slot and anything else is
    /// literal text.
    ///
    /// Literal text may not contain ASCII digits and may not follow the last
    /// slot; the pattern must contain at least one slot.
    pub fn parse(pattern: &str) -> RuleTableResult<Self> {
        let mut groups = Vec::new();
        let mut lead = String::new();
        let mut len = 0;

        for ch in pattern.chars() {
            if ch == DIGIT_SLOT {
                len += 1;
                continue;
            }
            if ch.is_ascii_digit() {
                return Err(RuleTableError::invalid_template(
                    pattern,
                    "literal text cannot contain digits",
                ));
            }
            if len > 0 {
                groups.push(TemplateGroup {
                    lead: std::mem::take(&mut lead),
                    len,
                });
                len = 0;
            }
            lead.push(ch);
        }

        if len == 0 {
            let reason = if groups.is_empty() {
                "pattern has no digit slots"
            } else {
                "literal text after the last digit slot"
            };
            return Err(RuleTableError::invalid_template(pattern, reason));
        }
        groups.push(TemplateGroup { lead, len });

        Ok(Self {
            layout: Layout::Grouped(groups),
        })
    }

    /// Build a repeating layout of `size`-digit runs joined by `separator`.
    pub fn repeating(size: usize, separator: impl Into<String>) -> RuleTableResult<Self> {
        let separator = separator.into();
        if size == 0 {
            return Err(RuleTableError::invalid_template(
                separator,
                "repeating group size must be at least 1",
            ));
        }
        if separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(RuleTableError::invalid_template(
                separator,
                "separator cannot contain digits",
            ));
        }
        Ok(Self {
            layout: Layout::Repeating { size, separator },
        })
    }

    /// The fallback layout: runs of three digits separated by a space.
    pub fn generic() -> Self {
        Self {
            layout: Layout::Repeating {
                size: GENERIC_GROUP_SIZE,
                separator: GENERIC_SEPARATOR.to_string(),
            },
        }
    }

    /// Whether this is a repeating (unbounded) layout.
    pub fn is_repeating(&self) -> bool {
        matches!(self.layout, Layout::Repeating { .. })
    }

    /// Digit capacity of a fixed pattern; repeating layouts are unbounded.
    pub fn max_digits(&self) -> Option<usize> {
        match &self.layout {
            Layout::Grouped(groups) => Some(groups.iter().map(TemplateGroup::len).sum()),
            Layout::Repeating { .. } => None,
        }
    }

    /// Groups of a fixed pattern, empty for repeating layouts.
    pub fn groups(&self) -> &[TemplateGroup] {
        match &self.layout {
            Layout::Grouped(groups) => groups,
            Layout::Repeating { .. } => &[],
        }
    }

    /// Reconstruct the pattern string of a fixed layout.
    pub fn pattern(&self) -> Option<String> {
        match &self.layout {
            Layout::Grouped(groups) => Some(
                groups
                    .iter()
                    .map(|g| format!("{}{}", g.lead, DIGIT_SLOT.to_string().repeat(g.len)))
                    .collect(),
            ),
            Layout::Repeating { .. } => None,
        }
    }

    /// Render a digit-only string.
    ///
    /// Callers pass RawDigits; any non-digit characters are copied through
    /// as if they were digits.
    pub fn render(&self, digits: &str) -> String {
        match &self.layout {
            Layout::Grouped(groups) => render_grouped(groups, digits),
            Layout::Repeating { size, separator } => render_repeating(*size, separator, digits),
        }
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::generic()
    }
}

fn render_grouped(groups: &[TemplateGroup], digits: &str) -> String {
    let capacity: usize = groups.iter().map(TemplateGroup::len).sum();
    let digits: Vec<char> = digits.chars().take(capacity).collect();

    // Reveal only as many groups as the digits reach into.
    let mut revealed = 0;
    let mut covered = 0;
    for group in groups {
        if covered >= digits.len() {
            break;
        }
        revealed += 1;
        covered += group.len;
    }

    if revealed <= 1 {
        return digits.into_iter().collect();
    }

    let mut out = String::with_capacity(digits.len() * 2);
    let mut rest = digits.as_slice();
    for group in &groups[..revealed] {
        out.push_str(&group.lead);
        let take = group.len.min(rest.len());
        out.extend(&rest[..take]);
        rest = &rest[take..];
    }
    out
}

fn render_repeating(size: usize, separator: &str, digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
