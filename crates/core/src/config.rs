//! Configuration system for the Tomasulo simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline structure sizes and latencies.
//! 2. **Structures:** Hierarchical config for general, machine, pipeline, and latency.
//! 3. **Validation:** Rejection of degenerate shapes before simulation begins.
//!
//! Configuration is supplied via JSON or `Config::default()` for the CLI.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Number of architectural registers.
    pub const REGISTERS: usize = 32;

    /// Number of addressable data memory words.
    pub const MEMORY_WORDS: usize = 1024;

    /// Maximum number of instructions accepted from a program file.
    pub const MAX_INSTRUCTIONS: usize = 256;

    /// Cycle watchdog: abort if the machine has not drained by this cycle.
    pub const MAX_CYCLES: u64 = 1_000_000;

    /// Reservation stations in the additive pool (ADD/SUB).
    pub const ADD_STATIONS: usize = 6;

    /// Reservation stations in the multiplicative pool (MUL/DIV).
    pub const MUL_STATIONS: usize = 3;

    /// Load buffer slots.
    pub const LOAD_BUFFERS: usize = 4;

    /// Store buffer slots.
    pub const STORE_BUFFERS: usize = 4;

    /// Reorder buffer slots. One slot always stays empty to distinguish
    /// full from empty in the circular layout, so at most `ROB_SLOTS - 1`
    /// instructions are in flight.
    pub const ROB_SLOTS: usize = 32;

    /// Execution latency of ADD/SUB in cycles.
    pub const LAT_ADD_SUB: u64 = 2;

    /// Execution latency of MUL in cycles.
    pub const LAT_MUL: u64 = 10;

    /// Execution latency of DIV in cycles.
    pub const LAT_DIV: u64 = 40;

    /// Execution latency of LOAD in cycles.
    pub const LAT_LOAD: u64 = 2;

    /// Execution latency of STORE in cycles.
    pub const LAT_STORE: u64 = 2;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use tomsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.machine.registers, 32);
/// assert_eq!(config.latency.div, 40);
/// ```
///
/// Deserializing a partial override from JSON (unspecified fields keep
/// their defaults):
///
/// ```
/// use tomsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace": true },
///     "pipeline": { "add_stations": 2, "rob_slots": 8 },
///     "latency": { "mul": 4 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.pipeline.add_stations, 2);
/// assert_eq!(config.pipeline.rob_slots, 8);
/// assert_eq!(config.latency.mul, 4);
/// assert_eq!(config.latency.div, 40);
/// assert_eq!(config.machine.memory_words, 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Architectural state sizes
    #[serde(default)]
    pub machine: MachineConfig,
    /// Pipeline structure sizes
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Functional unit latencies
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Config {
    /// Validates the configuration, rejecting shapes the engine cannot run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero-sized register file or memory,
    /// a reorder buffer with fewer than two slots, an empty station or
    /// buffer pool, a zero latency, or a zero cycle budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.machine.registers == 0 {
            return Err(ConfigError::NoRegisters);
        }
        if self.machine.memory_words == 0 {
            return Err(ConfigError::NoMemory);
        }
        if self.pipeline.rob_slots < 2 {
            return Err(ConfigError::RobTooSmall(self.pipeline.rob_slots));
        }
        if self.pipeline.add_stations == 0 {
            return Err(ConfigError::EmptyPool("add/sub station"));
        }
        if self.pipeline.mul_stations == 0 {
            return Err(ConfigError::EmptyPool("mul/div station"));
        }
        if self.pipeline.load_buffers == 0 {
            return Err(ConfigError::EmptyPool("load buffer"));
        }
        if self.pipeline.store_buffers == 0 {
            return Err(ConfigError::EmptyPool("store buffer"));
        }
        if self.latency.add_sub == 0 {
            return Err(ConfigError::ZeroLatency("add/sub"));
        }
        if self.latency.mul == 0 {
            return Err(ConfigError::ZeroLatency("mul"));
        }
        if self.latency.div == 0 {
            return Err(ConfigError::ZeroLatency("div"));
        }
        if self.latency.load == 0 {
            return Err(ConfigError::ZeroLatency("load"));
        }
        if self.latency.store == 0 {
            return Err(ConfigError::ZeroLatency("store"));
        }
        if self.general.max_cycles == 0 {
            return Err(ConfigError::NoCycleBudget);
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable the per-stage cycle trace on stderr.
    #[serde(default)]
    pub trace: bool,

    /// Cycle watchdog: a run that has not drained by this cycle fails
    /// instead of hanging.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Maximum number of instructions accepted from a program file.
    #[serde(default = "GeneralConfig::default_max_instructions")]
    pub max_instructions: usize,
}

impl GeneralConfig {
    /// Returns the default cycle watchdog budget.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    /// Returns the default program-length cap.
    fn default_max_instructions() -> usize {
        defaults::MAX_INSTRUCTIONS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_cycles: defaults::MAX_CYCLES,
            max_instructions: defaults::MAX_INSTRUCTIONS,
        }
    }
}

/// Architectural state sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Number of architectural registers.
    #[serde(default = "MachineConfig::default_registers")]
    pub registers: usize,

    /// Number of addressable data memory words.
    #[serde(default = "MachineConfig::default_memory_words")]
    pub memory_words: usize,
}

impl MachineConfig {
    /// Returns the default register count.
    fn default_registers() -> usize {
        defaults::REGISTERS
    }

    /// Returns the default memory size in words.
    fn default_memory_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            registers: defaults::REGISTERS,
            memory_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Pipeline structure sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Reservation stations in the additive pool (ADD/SUB).
    #[serde(default = "PipelineConfig::default_add_stations")]
    pub add_stations: usize,

    /// Reservation stations in the multiplicative pool (MUL/DIV).
    #[serde(default = "PipelineConfig::default_mul_stations")]
    pub mul_stations: usize,

    /// Load buffer slots.
    #[serde(default = "PipelineConfig::default_load_buffers")]
    pub load_buffers: usize,

    /// Store buffer slots.
    #[serde(default = "PipelineConfig::default_store_buffers")]
    pub store_buffers: usize,

    /// Reorder buffer slots (holds at most `rob_slots - 1` live entries).
    #[serde(default = "PipelineConfig::default_rob_slots")]
    pub rob_slots: usize,
}

impl PipelineConfig {
    /// Returns the default additive pool size.
    fn default_add_stations() -> usize {
        defaults::ADD_STATIONS
    }

    /// Returns the default multiplicative pool size.
    fn default_mul_stations() -> usize {
        defaults::MUL_STATIONS
    }

    /// Returns the default load buffer count.
    fn default_load_buffers() -> usize {
        defaults::LOAD_BUFFERS
    }

    /// Returns the default store buffer count.
    fn default_store_buffers() -> usize {
        defaults::STORE_BUFFERS
    }

    /// Returns the default reorder buffer size.
    fn default_rob_slots() -> usize {
        defaults::ROB_SLOTS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            add_stations: defaults::ADD_STATIONS,
            mul_stations: defaults::MUL_STATIONS,
            load_buffers: defaults::LOAD_BUFFERS,
            store_buffers: defaults::STORE_BUFFERS,
            rob_slots: defaults::ROB_SLOTS,
        }
    }
}

/// Functional unit execution latencies, in cycles.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    /// ADD/SUB latency.
    #[serde(default = "LatencyConfig::default_add_sub")]
    pub add_sub: u64,

    /// MUL latency.
    #[serde(default = "LatencyConfig::default_mul")]
    pub mul: u64,

    /// DIV latency.
    #[serde(default = "LatencyConfig::default_div")]
    pub div: u64,

    /// LOAD latency.
    #[serde(default = "LatencyConfig::default_load")]
    pub load: u64,

    /// STORE latency.
    #[serde(default = "LatencyConfig::default_store")]
    pub store: u64,
}

impl LatencyConfig {
    /// Returns the default ADD/SUB latency.
    fn default_add_sub() -> u64 {
        defaults::LAT_ADD_SUB
    }

    /// Returns the default MUL latency.
    fn default_mul() -> u64 {
        defaults::LAT_MUL
    }

    /// Returns the default DIV latency.
    fn default_div() -> u64 {
        defaults::LAT_DIV
    }

    /// Returns the default LOAD latency.
    fn default_load() -> u64 {
        defaults::LAT_LOAD
    }

    /// Returns the default STORE latency.
    fn default_store() -> u64 {
        defaults::LAT_STORE
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            add_sub: defaults::LAT_ADD_SUB,
            mul: defaults::LAT_MUL,
            div: defaults::LAT_DIV,
            load: defaults::LAT_LOAD,
            store: defaults::LAT_STORE,
        }
    }
}
