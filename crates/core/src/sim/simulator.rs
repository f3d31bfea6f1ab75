//! Top-level cycle driver.
//!
//! Owns the machine state and the scheduling engine side-by-side and drives
//! the fixed stage order once per cycle until the instruction stream is
//! exhausted and all in-flight state has drained.

use crate::config::Config;
use crate::core::machine::Machine;
use crate::core::pipeline::TomasuloEngine;
use crate::error::SimError;
use crate::isa::instruction::Instruction;

/// Driver state: running until the stream is exhausted and the engine idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Instructions remain to dispatch, or in-flight state remains to drain.
    Running,
    /// The program has fully retired; final register/memory state is precise.
    Drained,
}

/// Top-level simulator: machine state + scheduling engine + cycle counter.
#[derive(Debug)]
pub struct Simulator {
    /// Architectural state and the loaded program.
    pub machine: Machine,
    /// The scheduling engine.
    pub engine: TomasuloEngine,
    /// Cycles elapsed; the drain count is the cycle of the last commit.
    pub cycle: u64,
    /// Current driver state.
    pub state: SimState,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator for `program` under `config`.
    ///
    /// An empty program is Drained immediately, without special-casing in
    /// the cycle loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the configuration fails validation.
    pub fn new(program: Vec<Instruction>, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let machine = Machine::new(program, config);
        let engine = TomasuloEngine::new(config);
        let mut sim = Self {
            machine,
            engine,
            cycle: 0,
            state: SimState::Running,
            max_cycles: config.general.max_cycles,
        };
        sim.refresh_state();
        Ok(sim)
    }

    /// Advances the simulation by one cycle.
    ///
    /// Does nothing once Drained.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] when the configured cycle budget is
    /// exhausted before the machine drains.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.state == SimState::Drained {
            return Ok(());
        }
        if self.cycle >= self.max_cycles {
            return Err(SimError::CycleLimit(self.max_cycles));
        }

        self.cycle += 1;
        self.engine.tick(&mut self.machine, self.cycle);
        self.machine.stats.cycles = self.cycle;
        self.refresh_state();
        Ok(())
    }

    /// Runs to Drained and returns the total cycles consumed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] when the configured cycle budget is
    /// exhausted before the machine drains.
    pub fn run(&mut self) -> Result<u64, SimError> {
        while self.state == SimState::Running {
            self.tick()?;
        }
        Ok(self.cycle)
    }

    fn refresh_state(&mut self) {
        if self.machine.stream_exhausted() && self.engine.is_idle() {
            self.state = SimState::Drained;
        }
    }
}
