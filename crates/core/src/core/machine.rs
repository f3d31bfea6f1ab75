//! Machine: architectural state, program, program counter, and statistics.

use crate::config::Config;
use crate::core::memory::DataMemory;
use crate::core::regfile::RegisterFile;
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// Architectural state plus the instruction stream being scheduled.
///
/// The pipeline engine mutates this through the stage procedures; nothing
/// else touches it during a run.
#[derive(Debug)]
pub struct Machine {
    /// Register file (committed values + pending tags).
    pub regs: RegisterFile,
    /// Data memory, written only at commit.
    pub mem: DataMemory,
    /// The loaded program, in order.
    pub program: Vec<Instruction>,
    /// Index of the next instruction to dispatch.
    pub pc: usize,
    /// Per-stage cycle trace on stderr.
    pub trace: bool,
    /// Statistics counters and the schedule table.
    pub stats: SimStats,
}

impl Machine {
    /// Creates a machine for `program` with the configured state sizes.
    pub fn new(program: Vec<Instruction>, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.machine.registers),
            mem: DataMemory::new(config.machine.memory_words),
            program,
            pc: 0,
            trace: config.general.trace,
            stats: SimStats::default(),
        }
    }

    /// True once every program instruction has been dispatched.
    #[inline]
    pub fn stream_exhausted(&self) -> bool {
        self.pc >= self.program.len()
    }
}
