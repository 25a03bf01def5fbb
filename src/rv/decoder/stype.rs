use super::{bits, sext};
use crate::rv::instruction::Instruction;
use crate::rv::opcode::Opcode;

pub(super) fn decode(word: u32) -> Option<Instruction> {
    let funct3 = bits(word, 14, 12) as u8;
    let rbase = bits(word, 19, 15) as u8;
    let rs = bits(word, 24, 20) as u8;
    let offset = {
        let hi = bits(word, 31, 25);
        let lo = bits(word, 11, 7);
        sext((hi << 5) | lo, 12)
    };

    let code = match funct3 {
        0x0 => Opcode::Sb,
        0x1 => Opcode::Sh,
        0x2 => Opcode::Sw,
        0x3 => Opcode::Sd,
        _ => return None,
    };
    Some(Instruction::Store { code, rbase, rs, offset })
}
