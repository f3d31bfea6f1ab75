//! Start-execution and execution/broadcast stages.
//!
//! The start scan begins execution for every occupied, not-yet-executing
//! unit whose operands are resolved; pools are scanned in the fixed order
//! additive, multiplicative, loads, stores, and any number of units may
//! start in the same cycle. The execute phase then decrements every running
//! countdown; a unit reaching zero computes its result, marks its ROB entry
//! ready, frees its slot, and (for register-producing kinds) broadcasts on
//! the common data bus.
//!
//! Completion is two-phase: the scan collects (tag, value) events over all
//! pools first, then the broadcasts are applied, so every consumer observes
//! the completion set of a single stable cycle boundary.

use crate::config::LatencyConfig;
use crate::core::machine::Machine;
use crate::core::pipeline::buffers::{LoadBufferPool, StoreBufferPool};
use crate::core::pipeline::rob::{ReorderBuffer, RobTag};
use crate::core::pipeline::station::StationPool;
use crate::isa::instruction::Op;

/// Returns the fixed execution latency of an operation kind.
pub fn latency_of(latencies: &LatencyConfig, op: Op) -> u64 {
    match op {
        Op::Add | Op::Sub => latencies.add_sub,
        Op::Mul => latencies.mul,
        Op::Div => latencies.div,
        Op::Load => latencies.load,
        Op::Store => latencies.store,
        Op::Nop => 1,
    }
}

/// Executes the Start-Execution stage for one cycle.
///
/// A unit dispatched this very cycle is skipped: execution begins no
/// earlier than the cycle after dispatch. Likewise an operand resolved by a
/// broadcast later this cycle is seen only by next cycle's scan.
pub fn start_stage(
    add_stations: &mut StationPool,
    mul_stations: &mut StationPool,
    load_buffers: &mut LoadBufferPool,
    store_buffers: &mut StoreBufferPool,
    rob: &mut ReorderBuffer,
    latencies: &LatencyConfig,
    trace: bool,
    cycle: u64,
) {
    for pool in [add_stations, mul_stations] {
        for slot in pool.slots_mut() {
            if slot.busy
                && !slot.executing
                && slot.dispatched_at < cycle
                && slot.j.is_ready()
                && slot.k.is_ready()
            {
                slot.executing = true;
                slot.remaining = latency_of(latencies, slot.op);
                if let Some(tag) = slot.rob {
                    rob.mark_started(tag, cycle);
                    if trace {
                        eprintln!(
                            "IS  c{cycle} {} rob_tag={} latency={}",
                            slot.op, tag.0, slot.remaining
                        );
                    }
                }
            }
        }
    }

    // Loads have no operand dependency.
    for slot in load_buffers.slots_mut() {
        if slot.busy && !slot.executing && slot.dispatched_at < cycle {
            slot.executing = true;
            slot.remaining = latencies.load;
            if let Some(tag) = slot.rob {
                rob.mark_started(tag, cycle);
                if trace {
                    eprintln!("IS  c{cycle} LD rob_tag={} latency={}", tag.0, slot.remaining);
                }
            }
        }
    }

    for slot in store_buffers.slots_mut() {
        if slot.busy && !slot.executing && slot.dispatched_at < cycle && slot.value.is_ready() {
            slot.executing = true;
            slot.remaining = latencies.store;
            if let Some(tag) = slot.rob {
                rob.mark_started(tag, cycle);
                if trace {
                    eprintln!("IS  c{cycle} ST rob_tag={} latency={}", tag.0, slot.remaining);
                }
            }
        }
    }
}

/// Executes the Execution/Completion + Broadcast stage for one cycle.
pub fn execute_stage(
    machine: &mut Machine,
    add_stations: &mut StationPool,
    mul_stations: &mut StationPool,
    load_buffers: &mut LoadBufferPool,
    store_buffers: &mut StoreBufferPool,
    rob: &mut ReorderBuffer,
    cycle: u64,
) {
    // Phase 1: advance countdowns and collect this cycle's completions.
    let mut completions: Vec<(RobTag, i64)> = Vec::new();

    for pool in [&mut *add_stations, &mut *mul_stations] {
        for slot in pool.slots_mut() {
            if slot.busy && slot.executing {
                slot.remaining -= 1;
                if slot.remaining == 0 {
                    let result = compute(slot.op, slot.j.value, slot.k.value);
                    if let Some(tag) = slot.rob {
                        completions.push((tag, result));
                    }
                    slot.busy = false;
                    slot.executing = false;
                }
            }
        }
    }

    for slot in load_buffers.slots_mut() {
        if slot.busy && slot.executing {
            slot.remaining -= 1;
            if slot.remaining == 0 {
                // Load-immediate: the address field is the loaded constant.
                if let Some(tag) = slot.rob {
                    completions.push((tag, slot.addr));
                }
                slot.busy = false;
                slot.executing = false;
            }
        }
    }

    // Stores complete into their ROB entry only; no register tag can name a
    // store's slot, so there is nothing to broadcast.
    for slot in store_buffers.slots_mut() {
        if slot.busy && slot.executing {
            slot.remaining -= 1;
            if slot.remaining == 0 {
                if let Some(tag) = slot.rob {
                    rob.complete_store(tag, slot.addr, slot.value.value, cycle);
                    if machine.trace {
                        eprintln!(
                            "WB  c{cycle} ST rob_tag={} addr={} value={}",
                            tag.0, slot.addr, slot.value.value
                        );
                    }
                }
                slot.busy = false;
                slot.executing = false;
            }
        }
    }

    // Phase 2: mark ROB entries ready and fan the results out on the bus.
    for (tag, value) in completions {
        rob.complete(tag, value, cycle);
        broadcast(machine, add_stations, mul_stations, store_buffers, tag, value);
        machine.stats.cdb_broadcasts += 1;
        if machine.trace {
            eprintln!("WB  c{cycle} rob_tag={} value={value}", tag.0);
        }
    }
}

/// Common data bus fan-out: resolves `tag` with `value` in every consumer
/// pool and gives waiting registers their courtesy value copy.
fn broadcast(
    machine: &mut Machine,
    add_stations: &mut StationPool,
    mul_stations: &mut StationPool,
    store_buffers: &mut StoreBufferPool,
    tag: RobTag,
    value: i64,
) {
    add_stations.broadcast(tag, value);
    mul_stations.broadcast(tag, value);
    store_buffers.broadcast(tag, value);
    machine.regs.capture_broadcast(tag, value);
}

/// Computes an arithmetic or load result. Arithmetic wraps on overflow and
/// division by zero yields 0 rather than faulting.
fn compute(op: Op, j: i64, k: i64) -> i64 {
    match op {
        Op::Add => j.wrapping_add(k),
        Op::Sub => j.wrapping_sub(k),
        Op::Mul => j.wrapping_mul(k),
        Op::Div => {
            if k == 0 {
                0
            } else {
                j.wrapping_div(k)
            }
        }
        Op::Load | Op::Store | Op::Nop => 0,
    }
}
