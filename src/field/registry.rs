//! Explicit lifecycle management for phone fields.
//!
//! Hosts call [`PhoneFieldRegistry::init_field`] when a field appears and
//! [`PhoneFieldRegistry::teardown_field`] when it goes away, typically from
//! their own mount/unmount hooks. Events are routed by key through
//! [`PhoneFieldRegistry::dispatch`]. Fields share nothing but the read-only
//! rule table.

use super::config::FieldConfig;
use super::controller::FieldController;
use super::host::PhoneFieldHost;
use crate::error::{PhoneFieldError, PhoneFieldResult};
use crate::rules::RuleTable;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Instant;

/// An interaction reported by a host field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The number input changed
    Input,
    /// The country selector changed
    CountryChanged,
    /// Text was pasted into the number input
    Paste,
    /// The host's timer fired; run the paste pass if it is due
    Tick,
}

/// Result of initialising a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The key was not registered before
    Initialized,
    /// The key was registered; its state was rebuilt from the new handle
    Reinitialized,
}

/// Keyed collection of field controllers sharing one rule table and configuration.
///
/// # Examples
///
/// ```rust
/// use phone_field::field::{FieldEvent, InMemoryField, InitOutcome, PhoneFieldRegistry};
/// use std::time::Instant;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = PhoneFieldRegistry::standard();
/// let outcome = registry.init_field("contact-phone", InMemoryField::new("+91"))?;
/// assert_eq!(outcome, InitOutcome::Initialized);
///
/// if let Some(field) = registry.field_mut("contact-phone") {
///     field.host_mut().insert_text("9876543210");
/// }
/// registry.dispatch("contact-phone", FieldEvent::Input, Instant::now())?;
///
/// let host = registry.teardown_field("contact-phone").unwrap();
/// assert_eq!(host.text, "98765 43210");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PhoneFieldRegistry<'r, H> {
    rules: &'r RuleTable,
    config: FieldConfig,
    fields: HashMap<String, FieldController<'r, H>>,
}

impl<H: PhoneFieldHost> PhoneFieldRegistry<'static, H> {
    /// Create a registry with the standard rules and default configuration.
    pub fn standard() -> Self {
        Self {
            rules: RuleTable::standard(),
            config: FieldConfig::default(),
            fields: HashMap::new(),
        }
    }
}

impl<'r, H: PhoneFieldHost> PhoneFieldRegistry<'r, H> {
    /// Create a registry with custom rules and configuration.
    pub fn new(rules: &'r RuleTable, config: FieldConfig) -> PhoneFieldResult<Self> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            fields: HashMap::new(),
        })
    }

    /// Bind a field to the pipeline.
    ///
    /// Calling this again for a registered key replaces the handle and
    /// rebuilds the field's state from it; nothing is duplicated.
    pub fn init_field(&mut self, key: impl Into<String>, host: H) -> PhoneFieldResult<InitOutcome> {
        let key = key.into();
        let controller = FieldController::init(host, self.config.clone(), self.rules)?;
        match self.fields.insert(key.clone(), controller) {
            Some(previous) => {
                if previous.paste_deadline().is_some() {
                    warn!(
                        "Re-initialising field '{}' dropped a pending paste pass",
                        key
                    );
                }
                debug!("Re-initialised phone field '{}'", key);
                Ok(InitOutcome::Reinitialized)
            }
            None => {
                info!("Initialised phone field '{}'", key);
                Ok(InitOutcome::Initialized)
            }
        }
    }

    /// Unbind a field, returning its host handle.
    pub fn teardown_field(&mut self, key: &str) -> Option<H> {
        let controller = self.fields.remove(key)?;
        info!("Tore down phone field '{}'", key);
        Some(controller.teardown())
    }

    /// Route an event to a field.
    pub fn dispatch(&mut self, key: &str, event: FieldEvent, now: Instant) -> PhoneFieldResult<()> {
        let field = self
            .fields
            .get_mut(key)
            .ok_or_else(|| PhoneFieldError::field_not_found(key))?;
        match event {
            FieldEvent::Input => field.on_input(),
            FieldEvent::CountryChanged => field.on_country_change(),
            FieldEvent::Paste => field.on_paste(now),
            FieldEvent::Tick => {
                field.poll_paste(now);
            }
        }
        Ok(())
    }

    /// Run every paste pass that is due. Returns how many ran.
    pub fn poll_pastes(&mut self, now: Instant) -> usize {
        self.fields
            .values_mut()
            .map(|field| field.poll_paste(now))
            .filter(|ran| *ran)
            .count()
    }

    /// Earliest pending paste deadline across all fields.
    pub fn next_paste_deadline(&self) -> Option<Instant> {
        self.fields
            .values()
            .filter_map(FieldController::paste_deadline)
            .min()
    }

    pub fn field(&self, key: &str) -> Option<&FieldController<'r, H>> {
        self.fields.get(key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FieldController<'r, H>> {
        self.fields.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
