//! Commit stage: in-order retirement from the reorder buffer head.
//!
//! Inspects only the head entry and retires at most one instruction per
//! cycle, and never in the cycle its result was produced. Stores write
//! memory (out-of-range addresses are dropped and counted); register
//! producers write back only when the register's tag still names this slot,
//! so a later rename is never clobbered.

use crate::core::machine::Machine;
use crate::core::pipeline::rob::ReorderBuffer;
use crate::isa::instruction::Op;
use crate::stats::ScheduleRecord;

/// Executes the Commit stage for one cycle.
pub fn commit_stage(machine: &mut Machine, rob: &mut ReorderBuffer, cycle: u64) {
    let Some(head) = rob.peek_head() else {
        return;
    };
    if !head.ready || head.completed_at >= cycle {
        return;
    }

    let slot = rob.head_slot();
    let Some(entry) = rob.commit_head() else {
        return;
    };

    match entry.op {
        Op::Store => {
            if machine.mem.commit_write(entry.store_addr, entry.store_value) {
                if machine.trace {
                    eprintln!(
                        "CM  c{cycle} {:<24} mem[{}] <= {}",
                        entry.text, entry.store_addr, entry.store_value
                    );
                }
            } else {
                machine.stats.stores_dropped += 1;
            }
            machine.stats.inst_store += 1;
        }
        op => {
            if let Some(dest) = entry.dest {
                let written = machine.regs.commit_write(dest, slot, entry.value);
                if machine.trace {
                    let note = if written { "" } else { " (re-renamed, skipped)" };
                    eprintln!(
                        "CM  c{cycle} {:<24} r{dest} <= {}{note}",
                        entry.text, entry.value
                    );
                }
            }
            match op {
                Op::Add | Op::Sub => machine.stats.inst_alu += 1,
                Op::Mul | Op::Div => machine.stats.inst_mul_div += 1,
                Op::Load => machine.stats.inst_load += 1,
                Op::Store | Op::Nop => {}
            }
        }
    }

    machine.stats.instructions_retired += 1;
    machine.stats.schedule.push(ScheduleRecord {
        text: entry.text,
        dispatched: entry.dispatched_at,
        started: entry.started_at,
        completed: entry.completed_at,
        committed: cycle,
    });
}
