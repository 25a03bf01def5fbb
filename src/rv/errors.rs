use thiserror::Error;

use crate::rv::opcode::Opcode;

/// Runtime failures raised by the execution engine. All of these are fatal
/// to the running program; clean halts are signalled through `step()`'s
/// return value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("memory access out of bounds: {len} bytes at {addr:#010x}")]
    AccessViolation { addr: u32, len: u32 },

    #[error("pc {pc:#010x} outside loaded memory")]
    PcOutOfRange { pc: u32 },

    #[error("misaligned jump target {target:#010x} at pc {pc:#010x}")]
    MisalignedJump { pc: u32, target: u32 },

    #[error("invalid instruction {raw:#010x} at pc {pc:#010x}")]
    InvalidInstruction { pc: u32, raw: u32 },

    #[error("{} requires a 64-bit hart", .code.mnemonic())]
    WordWidth { code: Opcode },
}
