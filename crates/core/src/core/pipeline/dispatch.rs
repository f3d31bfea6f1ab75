//! Dispatch stage: program-order admission with register renaming.
//!
//! At most one instruction is admitted per cycle, in strict program order,
//! and only when both a structural resource (a free station or buffer of the
//! right kind) and a free ROB slot exist. When either is missing the program
//! counter does not advance; the stall is re-attempted next cycle.
//!
//! Source operands are captured before the destination register is renamed,
//! so an instruction like `ADD R1, R1, R2` reads its previous producer.

use crate::core::machine::Machine;
use crate::core::pipeline::buffers::{LoadBufferPool, StoreBufferPool};
use crate::core::pipeline::rob::ReorderBuffer;
use crate::core::pipeline::station::{Operand, StationPool};
use crate::core::regfile::RegisterFile;
use crate::isa::instruction::Op;

/// Executes the Dispatch stage for one cycle.
pub fn dispatch_stage(
    machine: &mut Machine,
    rob: &mut ReorderBuffer,
    add_stations: &mut StationPool,
    mul_stations: &mut StationPool,
    load_buffers: &mut LoadBufferPool,
    store_buffers: &mut StoreBufferPool,
    cycle: u64,
) {
    if machine.stream_exhausted() {
        return;
    }
    let ins = machine.program[machine.pc].clone();

    // NOP records consume their dispatch cycle and allocate nothing.
    if ins.op == Op::Nop {
        machine.stats.inst_nop += 1;
        machine.pc += 1;
        if machine.trace {
            eprintln!("DI  c{cycle} {:<24} (nop)", ins.text);
        }
        return;
    }

    // Unit scans and operand reads are pure; the ROB allocation is the
    // first state change, so a full ROB stalls with nothing consumed.
    let tag = match ins.op {
        Op::Add | Op::Sub | Op::Mul | Op::Div => {
            let pool = if ins.op.uses_mul_pool() {
                &mut *mul_stations
            } else {
                &mut *add_stations
            };
            let Some(idx) = pool.find_free() else {
                stall_unit(machine, &ins.text, pool.name, cycle);
                return;
            };

            let j = read_source(&machine.regs, rob, ins.src1);
            let k = read_source(&machine.regs, rob, ins.src2);
            let Some(tag) = rob.allocate(ins.op, Some(ins.dest), ins.imm, &ins.text, cycle)
            else {
                stall_rob(machine, &ins.text, cycle);
                return;
            };
            pool.dispatch(idx, ins.op, j, k, tag, cycle);
            machine.regs.assign_tag(ins.dest, tag);
            tag
        }
        Op::Load => {
            let Some(idx) = load_buffers.find_free() else {
                stall_unit(machine, &ins.text, "load buffer", cycle);
                return;
            };

            let Some(tag) = rob.allocate(ins.op, Some(ins.dest), ins.imm, &ins.text, cycle)
            else {
                stall_rob(machine, &ins.text, cycle);
                return;
            };
            load_buffers.dispatch(idx, ins.imm, tag, cycle);
            machine.regs.assign_tag(ins.dest, tag);
            tag
        }
        Op::Store => {
            let Some(idx) = store_buffers.find_free() else {
                stall_unit(machine, &ins.text, "store buffer", cycle);
                return;
            };

            let value = read_source(&machine.regs, rob, ins.src1);
            let Some(tag) = rob.allocate(ins.op, None, ins.imm, &ins.text, cycle) else {
                stall_rob(machine, &ins.text, cycle);
                return;
            };
            store_buffers.dispatch(idx, ins.imm, value, tag, cycle);
            tag
        }
        Op::Nop => unreachable!("handled above"),
    };

    machine.pc += 1;
    if machine.trace {
        eprintln!("DI  c{cycle} {:<24} rob_tag={}", ins.text, tag.0);
    }
}

/// Reads a source register as an operand.
///
/// An untagged register is ready. A tagged register whose producer has
/// already completed (broadcast happened, commit pending) is also ready:
/// the broadcast will not recur, so the produced value is read out of the
/// ROB entry directly. Otherwise the operand waits on the tag.
fn read_source(regs: &RegisterFile, rob: &ReorderBuffer, reg: usize) -> Operand {
    let (value, tag) = regs.read_operand(reg);
    match tag {
        None => Operand::ready(value),
        Some(tag) => match rob.value_if_ready(tag) {
            Some(produced) => Operand::ready(produced),
            None => Operand::waiting(tag),
        },
    }
}

/// Records a dispatch stall caused by a full unit pool.
fn stall_unit(machine: &mut Machine, text: &str, what: &str, cycle: u64) {
    machine.stats.dispatch_stalls_unit += 1;
    if machine.trace {
        eprintln!("DI  c{cycle} {text:<24} STALL no free {what}");
    }
}

/// Records a dispatch stall caused by a full reorder buffer.
fn stall_rob(machine: &mut Machine, text: &str, cycle: u64) {
    machine.stats.dispatch_stalls_rob += 1;
    if machine.trace {
        eprintln!("DI  c{cycle} {text:<24} STALL rob full");
    }
}
