//! Tomasulo dynamic-scheduling simulator library.
//!
//! This crate implements a cycle-by-cycle simulator of out-of-order instruction
//! scheduling with the following:
//! 1. **Core:** Register file with tag renaming, flat data memory, and machine state.
//! 2. **Pipeline:** Reservation stations, load/store buffers, a circular reorder
//!    buffer, and the per-cycle stage procedures (dispatch, start, execute/broadcast,
//!    commit).
//! 3. **ISA:** A line-oriented assembly parser producing immutable instruction records.
//! 4. **Simulation:** Program loader, cycle driver, state renderer, configuration,
//!    and statistics collection.

/// Simulator configuration (defaults, hierarchical config structures, validation).
pub mod config;
/// Machine state (register file, data memory) and the scheduling pipeline.
pub mod core;
/// Error types for configuration and simulation failures.
pub mod error;
/// Instruction set (operation kinds, instruction records, text parser).
pub mod isa;
/// Program loader, cycle driver, and state renderer.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Simulation errors (program read failure, invalid config, cycle limit).
pub use crate::error::SimError;
/// Decoded instruction record and its operation kind.
pub use crate::isa::instruction::{Instruction, Op};
/// Top-level cycle driver; construct with `Simulator::new` and call `run`.
pub use crate::sim::simulator::{SimState, Simulator};
/// Counter set and per-instruction schedule table.
pub use crate::stats::SimStats;
