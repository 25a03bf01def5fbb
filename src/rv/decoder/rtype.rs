use super::bits;
use crate::rv::instruction::Instruction;
use crate::rv::opcode::Opcode;

pub(super) fn decode(word: u32) -> Option<Instruction> {
    let rd = bits(word, 11, 7) as u8;
    let funct3 = bits(word, 14, 12) as u8;
    let rs1 = bits(word, 19, 15) as u8;
    let rs2 = bits(word, 24, 20) as u8;
    let funct7 = bits(word, 31, 25) as u8;

    let code = match (funct7, funct3) {
        (0x00, 0x0) => Opcode::Add,
        (0x20, 0x0) => Opcode::Sub,
        (0x00, 0x1) => Opcode::Sll,
        (0x00, 0x2) => Opcode::Slt,
        (0x00, 0x3) => Opcode::Sltu,
        (0x00, 0x4) => Opcode::Xor,
        (0x00, 0x5) => Opcode::Srl,
        (0x20, 0x5) => Opcode::Sra,
        (0x00, 0x6) => Opcode::Or,
        (0x00, 0x7) => Opcode::And,
        _ => return None,
    };
    Some(Instruction::Register { code, rd, rs1, rs2 })
}
