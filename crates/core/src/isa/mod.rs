//! Instruction set: operation kinds, instruction records, and the text parser.

/// Operation kinds and the immutable decoded instruction record.
pub mod instruction;
/// Line-oriented assembly parser.
pub mod parse;
