//! Program file loader.
//!
//! Reads a textual program from disk and runs it through the parser. An
//! unreadable file is the one fatal pre-simulation condition; it surfaces
//! as [`SimError::ProgramRead`] so the caller owns process exit.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::SimError;
use crate::isa::instruction::Instruction;
use crate::isa::parse;

/// Loads a program file into instruction records.
///
/// # Errors
///
/// Returns [`SimError::ProgramRead`] when the file cannot be read. Malformed
/// lines inside a readable file never fail; they degrade to NOP records.
pub fn load_program(path: &Path, config: &Config) -> Result<Vec<Instruction>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse::parse_program(&text, config))
}
