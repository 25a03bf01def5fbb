use thiserror::Error;

use crate::rv::opcode::Opcode;

/// Assembly failures. The assembler stops at the first one; `line` is
/// zero-based and printed one-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {}: {msg}", .line + 1)]
    Lex { line: usize, msg: String },

    #[error("line {}: {msg}", .line + 1)]
    Parse { line: usize, msg: String },

    #[error("line {}: label not found: {name}", .line + 1)]
    Label { line: usize, name: String },

    #[error("cannot encode {}", .code.mnemonic())]
    Encode { code: Opcode },
}
