//! Simulation layer: program loader, cycle driver, and state renderer.

/// Program file loader.
pub mod loader;
/// Read-only state renderer for per-cycle dumps.
pub mod render;
/// Top-level cycle driver.
pub mod simulator;
