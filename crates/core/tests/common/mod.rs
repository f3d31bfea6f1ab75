//! Shared test infrastructure.

/// Test harness wrapping a simulator with convenient accessors.
pub mod harness;
