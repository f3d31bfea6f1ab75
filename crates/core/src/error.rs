//! Error types for the simulator.
//!
//! The scheduling engine itself has no fatal conditions: structural hazards
//! stall, divide-by-zero yields zero, out-of-range stores are dropped, and
//! malformed input degrades to NOP. The errors here cover everything outside
//! that envelope: failing to read the program before simulation starts,
//! rejecting a degenerate configuration, and the cycle-limit watchdog.

use thiserror::Error;

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be opened or read. This is the only fatal
    /// pre-simulation condition.
    #[error("could not read program '{path}': {source}")]
    ProgramRead {
        /// Path of the program file that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The simulation did not drain within the configured cycle budget.
    #[error("cycle limit exceeded: simulation did not drain within {0} cycles")]
    CycleLimit(u64),
}

/// Configuration validation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The register file must hold at least one register.
    #[error("register count must be at least 1")]
    NoRegisters,

    /// The data memory must hold at least one word.
    #[error("memory size must be at least 1 word")]
    NoMemory,

    /// The circular reorder buffer keeps one slot empty, so fewer than two
    /// slots cannot hold any instruction.
    #[error("reorder buffer needs at least 2 slots, got {0}")]
    RobTooSmall(usize),

    /// A station or buffer pool has no slots.
    #[error("{0} pool must have at least 1 slot")]
    EmptyPool(&'static str),

    /// An operation latency of zero would complete before it starts.
    #[error("{0} latency must be at least 1 cycle")]
    ZeroLatency(&'static str),

    /// The cycle watchdog must allow at least one cycle.
    #[error("max_cycles must be at least 1")]
    NoCycleBudget,
}
