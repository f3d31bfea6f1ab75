//! Operation kinds and the immutable decoded instruction record.

use std::fmt;

/// Operation kind of a decoded instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op {
    /// Integer addition.
    Add,
    /// Integer subtraction.
    Sub,
    /// Integer multiplication.
    Mul,
    /// Integer division (divide-by-zero yields 0).
    Div,
    /// Load-immediate: the address field doubles as the loaded constant.
    Load,
    /// Store a register value to a resolved memory address.
    Store,
    /// No operation. Malformed input lines degrade to this.
    #[default]
    Nop,
}

impl Op {
    /// True for ADD/SUB/MUL/DIV, the operations held in reservation stations.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// True for operations dispatched to the multiplicative station pool.
    pub fn uses_mul_pool(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Load => "LD",
            Self::Store => "ST",
            Self::Nop => "NOP",
        };
        write!(f, "{name}")
    }
}

/// Immutable decoded instruction record.
///
/// Created once by the parser, never mutated. Fields that an operation kind
/// does not use stay zero: arithmetic ops use `dest`/`src1`/`src2`, loads use
/// `dest`/`imm`, stores use `src1`/`imm`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation kind.
    pub op: Op,
    /// Destination register index (arithmetic/load).
    pub dest: usize,
    /// First source register index (arithmetic/store).
    pub src1: usize,
    /// Second source register index (arithmetic only).
    pub src2: usize,
    /// Immediate: load constant / store address.
    pub imm: i64,
    /// Original source text, kept for display only.
    pub text: String,
}

impl Instruction {
    /// Builds an arithmetic instruction record.
    pub fn arithmetic(op: Op, dest: usize, src1: usize, src2: usize, text: &str) -> Self {
        Self {
            op,
            dest,
            src1,
            src2,
            imm: 0,
            text: text.to_string(),
        }
    }

    /// Builds a load-immediate instruction record.
    pub fn load(dest: usize, imm: i64, text: &str) -> Self {
        Self {
            op: Op::Load,
            dest,
            imm,
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Builds a store instruction record.
    pub fn store(src1: usize, addr: i64, text: &str) -> Self {
        Self {
            op: Op::Store,
            src1,
            imm: addr,
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Builds a NOP record carrying the source text it degraded from.
    pub fn nop(text: &str) -> Self {
        Self {
            op: Op::Nop,
            text: text.to_string(),
            ..Self::default()
        }
    }
}
