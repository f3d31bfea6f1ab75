//! Top-level scheduling engine.
//!
//! Owns the two reservation station pools, both memory buffer pools, and the
//! reorder buffer, and runs the fixed per-cycle stage order:
//! Dispatch → Start-Execution → Execution/Broadcast → Commit.

use crate::config::{Config, LatencyConfig};
use crate::core::machine::Machine;
use crate::core::pipeline::buffers::{LoadBufferPool, StoreBufferPool};
use crate::core::pipeline::rob::ReorderBuffer;
use crate::core::pipeline::station::StationPool;
use crate::core::pipeline::{commit, dispatch, execute};

/// The Tomasulo scheduling engine.
#[derive(Debug)]
pub struct TomasuloEngine {
    /// Additive reservation station pool (ADD/SUB).
    pub add_stations: StationPool,
    /// Multiplicative reservation station pool (MUL/DIV).
    pub mul_stations: StationPool,
    /// Load buffer pool.
    pub load_buffers: LoadBufferPool,
    /// Store buffer pool.
    pub store_buffers: StoreBufferPool,
    /// Reorder buffer.
    pub rob: ReorderBuffer,
    latencies: LatencyConfig,
}

impl TomasuloEngine {
    /// Creates an engine with the configured pool sizes and latencies.
    pub fn new(config: &Config) -> Self {
        Self {
            add_stations: StationPool::new("add/sub station", config.pipeline.add_stations),
            mul_stations: StationPool::new("mul/div station", config.pipeline.mul_stations),
            load_buffers: LoadBufferPool::new(config.pipeline.load_buffers),
            store_buffers: StoreBufferPool::new(config.pipeline.store_buffers),
            rob: ReorderBuffer::new(config.pipeline.rob_slots),
            latencies: config.latency.clone(),
        }
    }

    /// Advances the engine by one cycle, running the four stages in order.
    pub fn tick(&mut self, machine: &mut Machine, cycle: u64) {
        dispatch::dispatch_stage(
            machine,
            &mut self.rob,
            &mut self.add_stations,
            &mut self.mul_stations,
            &mut self.load_buffers,
            &mut self.store_buffers,
            cycle,
        );

        execute::start_stage(
            &mut self.add_stations,
            &mut self.mul_stations,
            &mut self.load_buffers,
            &mut self.store_buffers,
            &mut self.rob,
            &self.latencies,
            machine.trace,
            cycle,
        );

        execute::execute_stage(
            machine,
            &mut self.add_stations,
            &mut self.mul_stations,
            &mut self.load_buffers,
            &mut self.store_buffers,
            &mut self.rob,
            cycle,
        );

        commit::commit_stage(machine, &mut self.rob, cycle);
    }

    /// True when no station, buffer, or ROB slot is occupied.
    pub fn is_idle(&self) -> bool {
        self.add_stations.is_empty()
            && self.mul_stations.is_empty()
            && self.load_buffers.is_empty()
            && self.store_buffers.is_empty()
            && self.rob.is_empty()
    }
}
