//! Property-based tests for the pure number operations.

pub mod formatting;
