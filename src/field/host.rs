//! The seam between a field controller and the widget that owns the field.
//!
//! A [`PhoneFieldHost`] exposes the country selector, the number input with its
//! caret, the hidden combined-number output, and the error presentation. The
//! controller never touches markup directly; anything that can implement this
//! trait (a DOM binding, a TUI widget, a test double) can host a phone field.

use crate::number::char_len;
use crate::rules::RuleTable;
use serde::Serialize;
use std::time::Duration;

/// Widget operations a phone field controller needs.
pub trait PhoneFieldHost {
    /// Currently selected country code, as the selector reports it.
    fn country_code(&self) -> String;

    /// Change the selected country code.
    fn set_country_code(&mut self, code: &str);

    /// Whether the selector offers the given code.
    fn has_country_option(&self, code: &str) -> bool;

    /// Current text of the number input.
    fn number_text(&self) -> String;

    /// Replace the text of the number input.
    fn set_number_text(&mut self, text: &str);

    /// Caret offset in characters.
    fn caret(&self) -> usize;

    /// Move the caret to an offset in characters.
    fn set_caret(&mut self, caret: usize);

    /// Write the code-plus-digits value consumed by the rest of the form.
    fn set_combined_number(&mut self, combined: &str);

    /// Set the accessibility invalid flag.
    fn set_invalid(&mut self, invalid: bool);

    /// Show or hide the error message over the given transition.
    fn set_error_visible(&mut self, visible: bool, transition: Duration);
}

impl<T: PhoneFieldHost + ?Sized> PhoneFieldHost for &mut T {
    fn country_code(&self) -> String {
        (**self).country_code()
    }

    fn set_country_code(&mut self, code: &str) {
        (**self).set_country_code(code)
    }

    fn has_country_option(&self, code: &str) -> bool {
        (**self).has_country_option(code)
    }

    fn number_text(&self) -> String {
        (**self).number_text()
    }

    fn set_number_text(&mut self, text: &str) {
        (**self).set_number_text(text)
    }

    fn caret(&self) -> usize {
        (**self).caret()
    }

    fn set_caret(&mut self, caret: usize) {
        (**self).set_caret(caret)
    }

    fn set_combined_number(&mut self, combined: &str) {
        (**self).set_combined_number(combined)
    }

    fn set_invalid(&mut self, invalid: bool) {
        (**self).set_invalid(invalid)
    }

    fn set_error_visible(&mut self, visible: bool, transition: Duration) {
        (**self).set_error_visible(visible, transition)
    }
}

/// Headless field state, for tests and for hosts that mirror a remote widget.
///
/// The editing helpers mimic what a browser does before the controller sees
/// an event: text is inserted at the caret and the caret moves past it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryField {
    pub country_code: String,
    pub country_options: Vec<String>,
    pub text: String,
    pub caret: usize,
    pub combined_number: String,
    pub invalid: bool,
    pub error_visible: bool,
    #[serde(skip)]
    pub last_transition: Option<Duration>,
}

impl InMemoryField {
    /// Create an empty field whose selector offers every standard code.
    pub fn new(country_code: impl Into<String>) -> Self {
        let options = RuleTable::standard()
            .codes()
            .map(|code| code.to_string())
            .collect();
        Self::with_options(country_code, options)
    }

    /// Create an empty field with an explicit selector option list.
    pub fn with_options(country_code: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            country_code: country_code.into(),
            country_options: options,
            ..Self::default()
        }
    }

    /// Pre-fill the input, leaving the caret at the end.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.caret = char_len(&self.text);
        self
    }

    /// Insert text at the caret, as typing or pasting would.
    pub fn insert_text(&mut self, inserted: &str) {
        let at = self.byte_offset(self.caret);
        self.text.insert_str(at, inserted);
        self.caret += char_len(inserted);
    }

    /// Delete the character before the caret, as backspace would.
    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let start = self.byte_offset(self.caret - 1);
        let end = self.byte_offset(self.caret);
        self.text.replace_range(start..end, "");
        self.caret -= 1;
    }

    /// Replace the selector value without notifying anything, as a user pick would.
    pub fn select_country(&mut self, code: impl Into<String>) {
        self.country_code = code.into();
    }

    fn byte_offset(&self, caret: usize) -> usize {
        self.text
            .char_indices()
            .nth(caret)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl PhoneFieldHost for InMemoryField {
    fn country_code(&self) -> String {
        self.country_code.clone()
    }

    fn set_country_code(&mut self, code: &str) {
        self.country_code = code.to_string();
    }

    fn has_country_option(&self, code: &str) -> bool {
        self.country_options.iter().any(|option| option == code)
    }

    fn number_text(&self) -> String {
        self.text.clone()
    }

    fn set_number_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(char_len(&self.text));
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(char_len(&self.text));
    }

    fn set_combined_number(&mut self, combined: &str) {
        self.combined_number = combined.to_string();
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    fn set_error_visible(&mut self, visible: bool, transition: Duration) {
        self.error_visible = visible;
        self.last_transition = Some(transition);
    }
}
