use super::{bits, sext};
use crate::rv::instruction::Instruction;
use crate::rv::opcode::Opcode;

fn fields(word: u32) -> (u8, u8, u8, i32) {
    let rd = bits(word, 11, 7) as u8;
    let funct3 = bits(word, 14, 12) as u8;
    let rs = bits(word, 19, 15) as u8;
    let imm = sext(bits(word, 31, 20), 12);
    (rd, funct3, rs, imm)
}

pub(super) fn decode_opimm(word: u32) -> Option<Instruction> {
    let (rd, funct3, rs, imm) = fields(word);
    let funct7 = bits(word, 31, 25);

    let (code, operand) = match funct3 {
        0x0 => (Opcode::Addi, imm),
        0x2 => (Opcode::Slti, imm),
        0x3 => (Opcode::Sltiu, imm),
        0x4 => (Opcode::Xori, imm),
        0x6 => (Opcode::Ori, imm),
        0x7 => (Opcode::Andi, imm),
        // shifts keep only the 5-bit shamt; the rest of the immediate
        // field must be a recognized funct7
        0x1 if funct7 == 0x00 => (Opcode::Slli, (imm & 0x1F)),
        0x5 if funct7 == 0x00 => (Opcode::Srli, (imm & 0x1F)),
        0x5 if funct7 == 0x20 => (Opcode::Srai, (imm & 0x1F)),
        _ => return None,
    };
    Some(Instruction::Immediate { code, rd, rs, operand })
}

pub(super) fn decode_loads(word: u32) -> Option<Instruction> {
    let (rd, funct3, rs, operand) = fields(word);
    let code = match funct3 {
        0x0 => Opcode::Lb,
        0x1 => Opcode::Lh,
        0x2 => Opcode::Lw,
        0x3 => Opcode::Ld,
        0x4 => Opcode::Lbu,
        0x5 => Opcode::Lhu,
        0x6 => Opcode::Lwu,
        _ => return None,
    };
    Some(Instruction::Immediate { code, rd, rs, operand })
}

pub(super) fn decode_jalr(word: u32) -> Option<Instruction> {
    let (rd, funct3, rs, operand) = fields(word);
    if funct3 != 0 {
        return None;
    }
    Some(Instruction::Immediate { code: Opcode::Jalr, rd, rs, operand })
}

pub(super) fn decode_lui(word: u32) -> Instruction {
    let rd = bits(word, 11, 7) as u8;
    Instruction::UpperImmediate {
        code: Opcode::Lui,
        rd,
        operand: (word & 0xFFFF_F000) as i32,
    }
}

pub(super) fn decode_auipc(word: u32) -> Instruction {
    let rd = bits(word, 11, 7) as u8;
    Instruction::UpperImmediate {
        code: Opcode::Auipc,
        rd,
        operand: (word & 0xFFFF_F000) as i32,
    }
}

pub(super) fn decode_system(word: u32) -> Option<Instruction> {
    // only the two canonical words are recognized
    let code = match word {
        0x0000_0073 => Opcode::Ecall,
        0x0010_0073 => Opcode::Ebreak,
        _ => return None,
    };
    let (rd, _, rs, operand) = fields(word);
    Some(Instruction::Immediate { code, rd, rs, operand })
}

pub(super) fn decode_misc_mem(word: u32) -> Option<Instruction> {
    let (rd, funct3, rs, operand) = fields(word);
    let code = match funct3 {
        0x0 => Opcode::Fence,
        0x1 => Opcode::FenceI,
        _ => return None,
    };
    Some(Instruction::Immediate { code, rd, rs, operand })
}
