//! Machine state and the scheduling pipeline.

/// Machine: architectural state, program, program counter, and statistics.
pub mod machine;
/// Flat data memory written only at commit.
pub mod memory;
/// Scheduling pipeline: stations, buffers, reorder buffer, stage procedures.
pub mod pipeline;
/// Register file with value + pending-tag entries.
pub mod regfile;

pub use machine::Machine;
