use super::{bits, sext};
use crate::rv::instruction::Instruction;
use crate::rv::opcode::Opcode;

pub(super) fn decode(word: u32) -> Option<Instruction> {
    let funct3 = bits(word, 14, 12) as u8;
    let rs1 = bits(word, 19, 15) as u8;
    let rs2 = bits(word, 24, 20) as u8;
    // B-imm: [12|10:5|4:1|11] << 1
    let imm_bits = (bits(word, 31, 31) << 12)
        | (bits(word, 30, 25) << 5)
        | (bits(word, 11, 8) << 1)
        | (bits(word, 7, 7) << 11);
    let offset = sext(imm_bits, 13);

    let code = match funct3 {
        0x0 => Opcode::Beq,
        0x1 => Opcode::Bne,
        0x4 => Opcode::Blt,
        0x5 => Opcode::Bge,
        0x6 => Opcode::Bltu,
        0x7 => Opcode::Bgeu,
        _ => return None,
    };
    Some(Instruction::Branch { code, rs1, rs2, offset })
}
