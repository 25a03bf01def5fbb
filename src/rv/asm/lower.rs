use super::errors::AsmError;
use super::parser::{check_bits, Parsed, Stmt};
use crate::rv::instruction::{Instruction, Pseudo};
use crate::rv::opcode::Opcode;

/// Patch every statement that referenced a label. Offsets are relative to
/// the referencing instruction; `la` gets the absolute byte address of the
/// target within the emitted code.
pub(super) fn resolve_labels(parsed: &mut Parsed) -> Result<(), AsmError> {
    for f in &parsed.fixups {
        let Some(&target) = parsed.labels.get(&f.label) else {
            return Err(AsmError::Label { line: f.line, name: f.label.clone() });
        };
        let rel = (target as i64 - f.index as i64) * 4;
        match &mut parsed.stmts[f.index] {
            Stmt::Real(Instruction::Branch { offset, .. })
            | Stmt::Pseudo(Pseudo::BranchZero { offset, .. }) => {
                *offset = check_bits(rel, 13, f.line, "branch")?;
            }
            Stmt::Real(Instruction::Jump { offset, .. })
            | Stmt::Pseudo(Pseudo::JumpAbs { offset })
            | Stmt::Pseudo(Pseudo::Call { offset }) => {
                *offset = check_bits(rel, 21, f.line, "jump")?;
            }
            Stmt::Pseudo(Pseudo::LoadAddress { addr, .. }) => {
                *addr = (target as i64 * 4) as i32;
            }
            _ => {
                return Err(AsmError::Parse {
                    line: f.line,
                    msg: format!("label {} attached to a statement that takes none", f.label),
                })
            }
        }
    }
    Ok(())
}

/// Expand every pseudo statement into real instructions. The two-word
/// pseudos overwrite the filler slot the parser reserved right after them.
pub(super) fn lower(stmts: Vec<Stmt>) -> Vec<Instruction> {
    use Instruction as I;
    let mut out = Vec::with_capacity(stmts.len());
    let mut k = 0;
    while k < stmts.len() {
        match stmts[k].clone() {
            Stmt::Real(instr) => out.push(instr),
            Stmt::Pseudo(p) => match p {
                Pseudo::BranchZero { code, rs, offset } => {
                    let real = if code == Opcode::Beqz { Opcode::Beq } else { Opcode::Bne };
                    out.push(I::Branch { code: real, rs1: rs, rs2: 0, offset });
                }
                Pseudo::JumpAbs { offset } => {
                    out.push(I::Jump { code: Opcode::Jal, rd: 0, offset });
                }
                Pseudo::Call { offset } => {
                    out.push(I::Jump { code: Opcode::Jal, rd: 1, offset });
                }
                Pseudo::JumpReg { rs } => {
                    out.push(I::Immediate { code: Opcode::Jalr, rd: 0, rs, operand: 0 });
                }
                Pseudo::RegToReg { code: Opcode::Mv, rd, rs } => {
                    out.push(I::Register { code: Opcode::Add, rd, rs1: 0, rs2: rs });
                }
                Pseudo::RegToReg { code: Opcode::Neg, rd, rs } => {
                    out.push(I::Register { code: Opcode::Sub, rd, rs1: 0, rs2: rs });
                }
                Pseudo::RegToReg { rd, rs, .. } => {
                    // not
                    out.push(I::Immediate { code: Opcode::Xori, rd, rs, operand: -1 });
                }
                Pseudo::Set { code: Opcode::Seqz, rd, rs } => {
                    out.push(I::Immediate { code: Opcode::Sltiu, rd, rs, operand: 1 });
                }
                Pseudo::Set { rd, rs, .. } => {
                    // snez
                    out.push(I::Register { code: Opcode::Sltu, rd, rs1: 0, rs2: rs });
                }
                Pseudo::Nop => {
                    out.push(I::Immediate { code: Opcode::Addi, rd: 0, rs: 0, operand: 0 });
                }
                Pseudo::Ret => {
                    out.push(I::Immediate { code: Opcode::Jalr, rd: 0, rs: 1, operand: 0 });
                }
                Pseudo::LoadAddress { rd, addr } => {
                    out.push(I::UpperImmediate { code: Opcode::Auipc, rd, operand: addr & !0xFFF });
                    out.push(I::Immediate { code: Opcode::Addi, rd, rs: rd, operand: addr & 0xFFF });
                    k += 1; // second word replaces the filler
                }
                Pseudo::LoadImm { rd, imm } => {
                    out.push(I::UpperImmediate { code: Opcode::Lui, rd, operand: imm & !0xFFF });
                    out.push(I::Immediate { code: Opcode::Addi, rd, rs: rd, operand: imm & 0xFFF });
                    k += 1;
                }
            },
        }
        k += 1;
    }
    out
}
