mod btype;
mod itype;
mod jtype;
mod rtype;
mod stype;

use crate::rv::arch::*;
use crate::rv::instruction::Instruction;

#[inline]
fn bits(v: u32, hi: u8, lo: u8) -> u32 {
    (v >> lo) & ((1u32 << (hi - lo + 1)) - 1)
}

#[inline]
fn sext(v: u32, bits_n: u8) -> i32 {
    let shift = 32 - bits_n as u32;
    ((v << shift) as i32) >> shift
}

/// Decode one 32-bit word. Total: anything that is not a recognized
/// (opcode, funct3, funct7) combination comes back as `Error` carrying the
/// raw word, so callers decide whether that is fatal.
pub fn decode(word: u32) -> Instruction {
    let opcode = bits(word, 6, 0) as u8;
    let decoded = match opcode {
        OPC_RTYPE => rtype::decode(word),
        OPC_OPIMM => itype::decode_opimm(word),
        OPC_LOAD => itype::decode_loads(word),
        OPC_STORE => stype::decode(word),
        OPC_BRANCH => btype::decode(word),
        OPC_JAL => Some(jtype::decode_jal(word)),
        OPC_JALR => itype::decode_jalr(word),
        OPC_LUI => Some(itype::decode_lui(word)),
        OPC_AUIPC => Some(itype::decode_auipc(word)),
        OPC_SYSTEM => itype::decode_system(word),
        OPC_MISCMEM => itype::decode_misc_mem(word),
        _ => None,
    };
    decoded.unwrap_or(Instruction::Error { raw: word })
}
