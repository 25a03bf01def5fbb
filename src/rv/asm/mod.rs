pub mod errors;
pub mod lexer;
mod lower;
mod parser;


pub use errors::AsmError;

use crate::rv::encoder::encode;
use crate::rv::instruction::Instruction;

/// Assemble a full source text into machine words, ready to be written out
/// little-endian.
pub fn assemble(text: &str) -> Result<Vec<u32>, AsmError> {
    assemble_instrs(text)?.iter().map(encode).collect()
}

/// Same pipeline, stopped right before encoding. This is the list the
/// emulator semantics are defined over, with every pseudo already lowered.
pub fn assemble_instrs(text: &str) -> Result<Vec<Instruction>, AsmError> {
    let tokens = lexer::lex(text)?;
    let mut parsed = parser::parse(tokens)?;
    lower::resolve_labels(&mut parsed)?;
    Ok(lower::lower(parsed.stmts))
}
