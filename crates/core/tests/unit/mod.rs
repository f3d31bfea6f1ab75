//! Unit tests for the simulator components.

/// Configuration defaults, JSON overrides, and validation.
pub mod config;
/// Scheduling pipeline behavior.
pub mod pipeline;
/// Randomized termination and sequential-equivalence properties.
pub mod properties;
/// State renderer output sanity.
pub mod render;
/// Statistics counters and the schedule table.
pub mod stats;
