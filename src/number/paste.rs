//! Detection of a leading `+<digits>` country code in pasted text.

use crate::rules::{CountryCode, RuleTable};
use log::debug;
use serde::Serialize;

/// A recognised country code at the start of pasted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixMatch {
    /// The calling code the text started with
    pub code: CountryCode,
    /// Everything after the code, with leading whitespace removed
    pub rest: String,
}

/// Split a leading `+<digits>` token off pasted text.
///
/// The digit run is taken greedily, so `"+4420 7946"` yields the candidate
/// `"+4420"`. Returns `None` unless the text starts with `+` followed by at
/// least one ASCII digit. The candidate is not checked against any table.
///
/// ```rust
/// use phone_field::number::split_prefix;
///
/// assert_eq!(split_prefix("+44 20 7946 0958"), Some(("+44", "20 7946 0958")));
/// assert_eq!(split_prefix("+ 44"), None);
/// assert_eq!(split_prefix("020 7946 0958"), None);
/// ```
pub fn split_prefix(pasted: &str) -> Option<(&str, &str)> {
    let after_plus = pasted.strip_prefix('+')?;
    let digit_len = after_plus.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }
    let (candidate, rest) = pasted.split_at(1 + digit_len);
    Some((candidate, rest.trim_start()))
}

/// Extract a country code that `is_known` accepts from the start of pasted text.
///
/// Candidates that are not well-formed codes (more than three digits) or that
/// `is_known` rejects produce `None`; the caller then formats the whole text.
pub fn extract_prefix_with(
    pasted: &str,
    is_known: impl Fn(&CountryCode) -> bool,
) -> Option<PrefixMatch> {
    let (candidate, rest) = split_prefix(pasted)?;
    let Ok(code) = CountryCode::new(candidate) else {
        debug!("Pasted prefix '{}' is not a calling code", candidate);
        return None;
    };
    if !is_known(&code) {
        debug!("Pasted prefix {} is not a known calling code", code);
        return None;
    }
    Some(PrefixMatch {
        code,
        rest: rest.to_string(),
    })
}

impl RuleTable {
    /// Extract a leading country code that this table has a rule for.
    pub fn extract_prefix(&self, pasted: &str) -> Option<PrefixMatch> {
        extract_prefix_with(pasted, |code| self.contains(code.as_str()))
    }
}

/// Extract a leading country code known to the standard rule table.
pub fn extract_prefix(pasted: &str) -> Option<PrefixMatch> {
    RuleTable::standard().extract_prefix(pasted)
}
