//! Per-field orchestration of the formatting pipeline.
//!
//! A [`FieldController`] owns one host field and runs the full
//! format → validate → caret pipeline for every interaction. It keeps the only
//! mutable state in the crate: the latest validity result and the pending
//! paste deadline. Dropping the controller (or calling
//! [`FieldController::teardown`]) discards that state.
//!
//! # Examples
//!
//! ```rust
//! use phone_field::field::{FieldController, InMemoryField};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = FieldController::new(InMemoryField::new("+1"))?;
//!
//! controller.host_mut().insert_text("5551234567");
//! controller.on_input();
//!
//! let field = controller.host();
//! assert_eq!(field.text, "(555) 123-4567");
//! assert_eq!(field.combined_number, "+15551234567");
//! assert!(!field.invalid);
//! # Ok(())
//! # }
//! ```

use super::config::{FieldConfig, KnownCodes, PastePrefixPolicy};
use super::host::PhoneFieldHost;
use crate::error::{PhoneFieldResult, ValidationError};
use crate::number::{
    adjust_caret, char_len, combined_number, digit_count, extract_prefix_with, raw_digits,
    split_prefix,
};
use crate::rules::{CountryCode, RuleTable};
use log::{debug, trace};
use serde::Serialize;
use std::time::Instant;

/// Serializable view of a field after its latest event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub country_code: String,
    pub formatted: String,
    pub raw_digits: String,
    pub combined_number: String,
    pub valid: bool,
    pub error_visible: bool,
    pub paste_pending: bool,
}

#[derive(Debug, Default)]
struct FieldState {
    outcome: Option<Result<usize, ValidationError>>,
    error_visible: bool,
    pending_paste: Option<Instant>,
}

/// Controller binding the pure number operations to one host field.
#[derive(Debug)]
pub struct FieldController<'r, H> {
    host: H,
    config: FieldConfig,
    rules: &'r RuleTable,
    state: FieldState,
}

impl<H: PhoneFieldHost> FieldController<'static, H> {
    /// Initialise a field with the default configuration and standard rules.
    pub fn new(host: H) -> PhoneFieldResult<Self> {
        Self::init(host, FieldConfig::default(), RuleTable::standard())
    }
}

impl<'r, H: PhoneFieldHost> FieldController<'r, H> {
    /// Initialise a field.
    ///
    /// Writes the combined number for whatever the field already holds and
    /// records its validity. The error is hidden on the host, since the user
    /// has not interacted yet. Initialising the same host content again
    /// yields the same host state.
    pub fn init(host: H, config: FieldConfig, rules: &'r RuleTable) -> PhoneFieldResult<Self> {
        config.validate()?;
        let mut controller = Self {
            host,
            config,
            rules,
            state: FieldState::default(),
        };
        controller.update_combined_number();
        let code = controller.host.country_code();
        let text = controller.host.number_text();
        controller.state.outcome = Some(controller.rules.check(&text, &code));
        controller.host.set_invalid(false);
        let transition = controller.config.error_transition;
        controller.host.set_error_visible(false, transition);
        debug!(
            "Initialised phone field for {} with {} digits",
            code,
            digit_count(&text)
        );
        Ok(controller)
    }

    /// Handle an input event: the host has already applied the keystroke.
    pub fn on_input(&mut self) {
        trace!("Input event");
        self.reformat();
    }

    /// Handle a change of the country selector.
    pub fn on_country_change(&mut self) {
        trace!("Country changed to {}", self.host.country_code());
        self.reformat();
    }

    /// Handle a paste event by scheduling the paste pass.
    ///
    /// The pass runs once the configured delay has elapsed, after the host's
    /// own paste insertion. A second paste before then replaces the pending
    /// pass rather than queueing another one.
    pub fn on_paste(&mut self, now: Instant) {
        let deadline = now + self.config.paste_delay;
        if self.state.pending_paste.replace(deadline).is_some() {
            debug!("Paste pass rescheduled");
        } else {
            trace!("Paste pass scheduled");
        }
    }

    /// When the pending paste pass is due, if one is scheduled.
    pub fn paste_deadline(&self) -> Option<Instant> {
        self.state.pending_paste
    }

    /// Run the pending paste pass if its deadline has passed.
    ///
    /// Returns whether a pass ran.
    pub fn poll_paste(&mut self, now: Instant) -> bool {
        match self.state.pending_paste {
            Some(deadline) if deadline <= now => self.flush_paste(),
            _ => false,
        }
    }

    /// Run the pending paste pass immediately, ignoring its deadline.
    ///
    /// Returns whether a pass was pending.
    pub fn flush_paste(&mut self) -> bool {
        if self.state.pending_paste.take().is_none() {
            return false;
        }

        let pasted = self.host.number_text();
        let number = self.strip_pasted_prefix(&pasted);
        let code = self.host.country_code();
        let formatted = self.rules.format(&number, &code);
        trace!("Paste pass produced '{}' for {}", formatted, code);

        self.host.set_number_text(&formatted);
        self.host.set_caret(char_len(&formatted));
        self.update_combined_number();
        self.apply_validity(&formatted, &code);
        true
    }

    /// Schedule a paste pass, wait for its deadline, and run it.
    pub async fn settle_paste(&mut self) -> bool {
        self.on_paste(Instant::now());
        if let Some(deadline) = self.state.pending_paste {
            let deadline = tokio::time::Instant::from_std(deadline);
            tokio::time::sleep_until(deadline).await;
        }
        self.flush_paste()
    }

    /// Write the code-plus-digits value to the host.
    pub fn update_combined_number(&mut self) {
        let combined = combined_number(&self.host.country_code(), &self.host.number_text());
        self.host.set_combined_number(&combined);
    }

    /// Whether the current number satisfies its country's rule.
    pub fn is_valid(&self) -> bool {
        matches!(self.state.outcome, Some(Ok(_)))
    }

    /// Reason the current number fails its country's rule, if it does.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match &self.state.outcome {
            Some(Err(error)) => Some(error),
            _ => None,
        }
    }

    /// Whether the controller last asked the host to show the error.
    pub fn error_visible(&self) -> bool {
        self.state.error_visible
    }

    /// Capture the field's current state.
    pub fn snapshot(&self) -> FieldSnapshot {
        let code = self.host.country_code();
        let formatted = self.host.number_text();
        FieldSnapshot {
            combined_number: combined_number(&code, &formatted),
            raw_digits: raw_digits(&formatted),
            country_code: code,
            formatted,
            valid: self.is_valid(),
            error_visible: self.state.error_visible,
            paste_pending: self.state.pending_paste.is_some(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Release the host, discarding all per-field state.
    pub fn teardown(self) -> H {
        if self.state.pending_paste.is_some() {
            debug!("Discarding pending paste pass on teardown");
        }
        self.host
    }

    fn reformat(&mut self) {
        let code = self.host.country_code();
        let raw = self.host.number_text();
        let caret = self.host.caret();

        let formatted = self.rules.format(&raw, &code);
        self.host.set_number_text(&formatted);
        self.host.set_caret(adjust_caret(caret, char_len(&raw), char_len(&formatted)));

        self.update_combined_number();
        self.apply_validity(&formatted, &code);
    }

    /// Remove a pasted country code from the number, selecting its country
    /// when the code is known.
    fn strip_pasted_prefix(&mut self, pasted: &str) -> String {
        match self.config.paste_prefix_policy {
            PastePrefixPolicy::MatchedOnly => {
                match extract_prefix_with(pasted, |code| self.is_known(code.as_str())) {
                    Some(matched) => {
                        debug!("Pasted number carries country code {}", matched.code);
                        self.host.set_country_code(matched.code.as_str());
                        matched.rest
                    }
                    None => pasted.to_string(),
                }
            }
            PastePrefixPolicy::AlwaysStrip => match split_prefix(pasted) {
                Some((candidate, rest)) => {
                    if CountryCode::is_well_formed(candidate) && self.is_known(candidate) {
                        debug!("Pasted number carries country code {}", candidate);
                        self.host.set_country_code(candidate);
                    } else {
                        debug!("Stripping unknown pasted prefix {}", candidate);
                    }
                    rest.to_string()
                }
                None => pasted.to_string(),
            },
        }
    }

    fn is_known(&self, code: &str) -> bool {
        match self.config.known_codes {
            KnownCodes::SelectorOptions => self.host.has_country_option(code),
            KnownCodes::RuleTable => self.rules.contains(code),
        }
    }

    fn apply_validity(&mut self, formatted: &str, code: &str) {
        let outcome = self.rules.check(formatted, code);
        let suppressed = self.config.suppress_empty_error && digit_count(formatted) == 0;
        let show_error = outcome.is_err() && !suppressed;

        if let Err(error) = &outcome {
            if show_error {
                debug!("Phone number invalid: {}", error);
            }
        }

        self.host.set_invalid(show_error);
        self.host.set_error_visible(show_error, self.config.error_transition);
        self.state.error_visible = show_error;
        self.state.outcome = Some(outcome);
    }
}
