//! Field orchestration: the host seam, per-field controllers, configuration,
//! and explicit init/teardown lifecycle.
//!
//! Everything stateful in the crate lives here, scoped to a single field. The
//! pure number operations in [`crate::number`] do the actual work.

mod config;
mod controller;
mod host;
mod registry;

pub use config::{
    DEFAULT_ERROR_TRANSITION, DEFAULT_PASTE_DELAY, FieldConfig, FieldConfigBuilder, KnownCodes,
    MAX_DELAY, PastePrefixPolicy,
};
pub use controller::{FieldController, FieldSnapshot};
pub use host::{InMemoryField, PhoneFieldHost};
pub use registry::{FieldEvent, InitOutcome, PhoneFieldRegistry};
