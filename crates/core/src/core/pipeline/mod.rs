//! Scheduling pipeline: reservation stations, load/store buffers, the
//! reorder buffer, and the per-cycle stage procedures.

/// Load and store buffer pools.
pub mod buffers;
/// Commit stage: in-order retirement from the reorder buffer head.
pub mod commit;
/// Dispatch stage: program-order admission with register renaming.
pub mod dispatch;
/// Top-level engine owning the pools and running the fixed stage order.
pub mod engine;
/// Start-execution and execution/broadcast stages.
pub mod execute;
/// Circular reorder buffer; slot indices double as renaming tags.
pub mod rob;
/// Reservation station pools for arithmetic operations.
pub mod station;

pub use engine::TomasuloEngine;
