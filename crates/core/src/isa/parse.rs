//! Line-oriented assembly parser.
//!
//! Translates textual programs into [`Instruction`] records. The accepted
//! syntax, per line:
//!
//! - `#`-prefixed lines and blank lines are skipped; an inline `#` starts a
//!   comment that runs to end of line.
//! - `ADD dst, src1, src2` / `SUB` / `MUL` / `DIV` — arithmetic.
//! - `LD dst, imm` (aliases `LDA`, `LI`) — load-immediate.
//! - `ST src, addr` (alias `SD`) — store.
//!
//! Mnemonics are case-insensitive and registers are written `rN`. Malformed
//! lines (unknown mnemonic, wrong arity, unparseable token, register index
//! out of the configured range) degrade to NOP records carrying the source
//! text; the parser never aborts a run.

use tracing::warn;

use crate::config::Config;
use crate::isa::instruction::{Instruction, Op};

/// Parses a whole program text into instruction records.
///
/// Comment and blank lines produce nothing; every other line produces exactly
/// one record (possibly a NOP). Input is capped at the configured
/// `max_instructions` records.
pub fn parse_program(text: &str, config: &Config) -> Vec<Instruction> {
    let mut program = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        program.push(parse_line(line, config.machine.registers));
        if program.len() >= config.general.max_instructions {
            break;
        }
    }
    program
}

/// Parses one non-empty, comment-stripped line into an instruction record.
pub fn parse_line(line: &str, registers: usize) -> Instruction {
    let Some(instr) = try_parse_line(line, registers) else {
        warn!(line, "malformed instruction, degrading to NOP");
        return Instruction::nop(line);
    };
    instr
}

fn try_parse_line(line: &str, registers: usize) -> Option<Instruction> {
    let (mnemonic, rest) = match line.split_once(char::is_whitespace) {
        Some((m, r)) => (m, r),
        None => (line, ""),
    };

    let op = parse_op(mnemonic)?;
    let args: Vec<&str> = rest.split(',').map(str::trim).collect();

    match op {
        Op::Add | Op::Sub | Op::Mul | Op::Div => {
            let [rd, rs, rt] = args.as_slice() else {
                return None;
            };
            let dest = register_index(rd, registers)?;
            let src1 = register_index(rs, registers)?;
            let src2 = register_index(rt, registers)?;
            Some(Instruction::arithmetic(op, dest, src1, src2, line))
        }
        Op::Load => {
            let [rd, imm] = args.as_slice() else {
                return None;
            };
            let dest = register_index(rd, registers)?;
            let imm = imm.parse::<i64>().ok()?;
            Some(Instruction::load(dest, imm, line))
        }
        Op::Store => {
            let [rs, addr] = args.as_slice() else {
                return None;
            };
            let src1 = register_index(rs, registers)?;
            let addr = addr.parse::<i64>().ok()?;
            Some(Instruction::store(src1, addr, line))
        }
        Op::Nop => Some(Instruction::nop(line)),
    }
}

/// Maps a mnemonic to its operation kind, accepting the historical aliases.
fn parse_op(mnemonic: &str) -> Option<Op> {
    match mnemonic.to_ascii_lowercase().as_str() {
        "add" => Some(Op::Add),
        "sub" => Some(Op::Sub),
        "mul" => Some(Op::Mul),
        "div" => Some(Op::Div),
        "ld" | "lda" | "li" => Some(Op::Load),
        "st" | "sd" => Some(Op::Store),
        "nop" => Some(Op::Nop),
        _ => None,
    }
}

/// Parses an `rN` register token, validated against the configured count.
fn register_index(token: &str, registers: usize) -> Option<usize> {
    let rest = token
        .strip_prefix('r')
        .or_else(|| token.strip_prefix('R'))?;
    let idx = rest.parse::<usize>().ok()?;
    (idx < registers).then_some(idx)
}
