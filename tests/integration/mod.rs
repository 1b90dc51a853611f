//! Integration tests for phone field formatting and field orchestration.
//!
//! ## Test Organization
//!
//! - `scenarios` - Reference formatting and validation cases across countries
//! - `field_lifecycle` - Typing, country changes, registry init/teardown
//! - `paste_handling` - Pasted country codes, deferred passes, prefix policies

pub mod field_lifecycle;
pub mod scenarios;
