//! Read-only state renderer.
//!
//! Formats a snapshot of every scheduling structure (both station pools,
//! both buffer pools, the ROB with head/tail pointers, all registers as
//! value:tag pairs, and the non-zero low-memory window) as a human-readable
//! table dump. Pure function of the simulator; the engine never requires it,
//! so headless operation is unaffected.

use std::fmt::Write;

use crate::core::pipeline::rob::RobTag;
use crate::sim::simulator::Simulator;

/// Memory words scanned for the non-zero window at the bottom of each dump.
const MEMORY_WINDOW: usize = 64;

fn tag_num(tag: Option<RobTag>) -> usize {
    tag.map_or(0, |t| t.0)
}

/// Renders the full simulator state after the given cycle.
pub fn render(sim: &Simulator) -> String {
    let mut out = String::new();
    let machine = &sim.machine;
    let engine = &sim.engine;

    let _ = writeln!(
        out,
        "------------------------------------------------------------"
    );
    let _ = writeln!(out, "CYCLE: {}", sim.cycle);
    let _ = writeln!(out, "PC: {} / {}", machine.pc, machine.program.len());

    for (title, pool) in [
        ("RESERVATION STATIONS (ADD/SUB)", &engine.add_stations),
        ("RESERVATION STATIONS (MUL/DIV)", &engine.mul_stations),
    ] {
        let _ = writeln!(out, "\n{title}:");
        let _ = writeln!(out, "Idx | Busy | Op  |   Vj |   Vk | Qj | Qk | ROB");
        for (i, s) in pool.slots().iter().enumerate() {
            let op = if s.busy { s.op.to_string() } else { "--".into() };
            let _ = writeln!(
                out,
                "{i:>3} | {:>4} | {op:<3} | {:>4} | {:>4} | {:>2} | {:>2} | {:>3}",
                u8::from(s.busy),
                s.j.value,
                s.k.value,
                tag_num(s.j.tag),
                tag_num(s.k.tag),
                tag_num(s.rob),
            );
        }
    }

    let _ = writeln!(out, "\nLOAD BUFFERS (load immediate):");
    let _ = writeln!(out, "Idx | Busy |  Imm | ROB | Left");
    for (i, s) in engine.load_buffers.slots().iter().enumerate() {
        let _ = writeln!(
            out,
            "{i:>3} | {:>4} | {:>4} | {:>3} | {:>4}",
            u8::from(s.busy),
            s.addr,
            tag_num(s.rob),
            s.remaining,
        );
    }

    let _ = writeln!(out, "\nSTORE BUFFERS:");
    let _ = writeln!(out, "Idx | Busy | Addr |    V |  Q | ROB | Left");
    for (i, s) in engine.store_buffers.slots().iter().enumerate() {
        let _ = writeln!(
            out,
            "{i:>3} | {:>4} | {:>4} | {:>4} | {:>2} | {:>3} | {:>4}",
            u8::from(s.busy),
            s.addr,
            s.value.value,
            tag_num(s.value.tag),
            tag_num(s.rob),
            s.remaining,
        );
    }

    let _ = writeln!(
        out,
        "\nROB (head={} tail={}):",
        engine.rob.head_slot().0,
        engine.rob.tail_slot().0
    );
    let _ = writeln!(out, "Idx | Op  | Dest | Ready | Value | Instr");
    for (slot, entry) in engine.rob.iter_slots() {
        if entry.occupied {
            let dest = entry.dest.map_or(-1, |d| d as i64);
            let _ = writeln!(
                out,
                "{slot:>3} | {:<3} | {dest:>4} | {:>5} | {:>5} | {}",
                entry.op,
                u8::from(entry.ready),
                entry.value,
                entry.text,
            );
        }
    }

    let _ = writeln!(out, "\nRegisters (value : tag):");
    for (i, entry) in machine.regs.entries().iter().enumerate() {
        let _ = write!(out, "R{i:02}={:>5} : t={:>2}\t", entry.value, tag_num(entry.tag));
        if (i + 1) % 4 == 0 {
            let _ = writeln!(out);
        }
    }
    if machine.regs.len() % 4 != 0 {
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "\nMemory (non-zero addresses up to {MEMORY_WINDOW}):");
    for (addr, value) in machine.mem.nonzero_window(MEMORY_WINDOW) {
        let _ = write!(out, "M[{addr}]={value}  ");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "------------------------------------------------------------"
    );
    out
}
