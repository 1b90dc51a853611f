//! Controller and registry behaviour across a field's lifetime.

use crate::common::{backspace, init_logging, type_text};
use phone_field::RuleTable;
use phone_field::error::PhoneFieldError;
use phone_field::field::{
    FieldConfig, FieldController, FieldEvent, InMemoryField, InitOutcome, PhoneFieldRegistry,
};
use std::time::{Duration, Instant};

#[test]
fn test_typing_then_correcting() {
    init_logging();
    let mut controller = FieldController::new(InMemoryField::new("+1")).unwrap();

    type_text(&mut controller, "55512345678");
    assert_eq!(controller.host().text, "(555) 123-4567");
    assert!(controller.is_valid());

    backspace(&mut controller, 2);
    assert_eq!(controller.host().text, "(555) 123-45");
    assert!(controller.host().invalid);
    assert!(controller.host().error_visible);
    assert_eq!(controller.host().combined_number, "+155512345");

    backspace(&mut controller, 20);
    assert_eq!(controller.host().text, "");
    assert_eq!(controller.host().caret, 0);
    assert!(!controller.host().invalid);
    assert!(!controller.host().error_visible);
    assert_eq!(controller.host().combined_number, "+1");
}

#[test]
fn test_country_switch_revalidates() {
    init_logging();
    let mut controller = FieldController::new(InMemoryField::new("+47")).unwrap();
    type_text(&mut controller, "41234567");
    assert_eq!(controller.host().text, "412 345 67");
    assert!(controller.is_valid());

    controller.host_mut().select_country("+1");
    controller.on_country_change();
    assert_eq!(controller.host().text, "(412) 345-67");
    assert!(!controller.is_valid());
    assert!(controller.host().error_visible);
    assert_eq!(controller.host().combined_number, "+141234567");
}

#[test]
fn test_unparsable_selection_falls_back() {
    init_logging();
    let mut controller = FieldController::new(InMemoryField::new("")).unwrap();
    type_text(&mut controller, "1234567");
    assert_eq!(controller.host().text, "123 456 7");
    assert!(controller.is_valid());
    assert_eq!(controller.host().combined_number, "1234567");
}

#[test]
fn test_registry_lifecycle() {
    init_logging();
    let mut registry = PhoneFieldRegistry::standard();
    assert!(registry.is_empty());

    let first = registry
        .init_field("billing", InMemoryField::new("+44"))
        .unwrap();
    assert_eq!(first, InitOutcome::Initialized);

    registry
        .field_mut("billing")
        .unwrap()
        .host_mut()
        .insert_text("07946095812");
    registry
        .dispatch("billing", FieldEvent::Input, Instant::now())
        .unwrap();

    // A host re-initialising the same field must not corrupt it
    let current = registry.field("billing").unwrap().host().clone();
    let again = registry.init_field("billing", current.clone()).unwrap();
    assert_eq!(again, InitOutcome::Reinitialized);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.field("billing").unwrap().host(), &current);
    assert!(registry.field("billing").unwrap().is_valid());

    let host = registry.teardown_field("billing").unwrap();
    assert_eq!(host.text, "0794 609 5812");
    assert!(matches!(
        registry.dispatch("billing", FieldEvent::Input, Instant::now()),
        Err(PhoneFieldError::FieldNotFound { .. })
    ));
}

#[test]
fn test_reinit_clears_error_left_on_host() {
    init_logging();
    let mut registry = PhoneFieldRegistry::standard();
    registry
        .init_field("mobile", InMemoryField::new("+1"))
        .unwrap();

    let field = registry.field_mut("mobile").unwrap();
    type_text(field, "555");
    assert!(field.host().error_visible);
    assert!(field.host().invalid);

    let shown = field.host().clone();
    let outcome = registry.init_field("mobile", shown).unwrap();
    assert_eq!(outcome, InitOutcome::Reinitialized);

    let field = registry.field("mobile").unwrap();
    assert!(!field.host().error_visible);
    assert!(!field.host().invalid);
    assert!(!field.error_visible());
    assert!(!field.is_valid());

    let snapshot = field.snapshot();
    assert_eq!(snapshot.error_visible, field.host().error_visible);
    assert_eq!(snapshot.combined_number, "+1555");

    // Initialising the cleared host again changes nothing
    let settled = field.host().clone();
    registry.init_field("mobile", settled.clone()).unwrap();
    assert_eq!(registry.field("mobile").unwrap().host(), &settled);
}

#[test]
fn test_registry_with_custom_rules() {
    init_logging();
    let rules = RuleTable::from_json(crate::common::fixtures::custom_rules_json()).unwrap();
    let config = FieldConfig::builder()
        .with_paste_delay(Duration::ZERO)
        .build()
        .unwrap();
    let mut registry = PhoneFieldRegistry::new(&rules, config).unwrap();
    registry
        .init_field(
            "fr",
            InMemoryField::with_options("+33", vec!["+33".to_string(), "+353".to_string()]),
        )
        .unwrap();

    let now = Instant::now();
    registry
        .field_mut("fr")
        .unwrap()
        .host_mut()
        .insert_text("+353 87 123 4567");
    registry.dispatch("fr", FieldEvent::Paste, now).unwrap();
    registry.dispatch("fr", FieldEvent::Tick, now).unwrap();

    let field = registry.field("fr").unwrap();
    assert_eq!(field.host().country_code, "+353");
    assert_eq!(field.host().text, "871 234 567");
    assert!(field.is_valid());
}

#[test]
fn test_snapshot_serializes() {
    let mut controller = FieldController::new(InMemoryField::new("+91")).unwrap();
    type_text(&mut controller, "9876543210");
    let json = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(json["countryCode"], "+91");
    assert_eq!(json["formatted"], "98765 43210");
    assert_eq!(json["rawDigits"], "9876543210");
    assert_eq!(json["combinedNumber"], "+919876543210");
    assert_eq!(json["valid"], true);
    assert_eq!(json["errorVisible"], false);
    assert_eq!(json["pastePending"], false);
}
