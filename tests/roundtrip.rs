use rv32_asm::rv::{decoder, disasm, encoder};
use rv32_asm::{assemble, Instruction, Opcode};

#[test]
fn constructed_instructions_round_trip_through_encoding() {
    use Opcode::*;
    let mut cases = Vec::new();
    for code in [Add, Sub, Sll, Slt, Sltu, Xor, Srl, Sra, Or, And] {
        cases.push(Instruction::Register { code, rd: 1, rs1: 2, rs2: 31 });
    }
    for code in [Addi, Slti, Sltiu, Xori, Ori, Andi] {
        for operand in [-2048, -1, 0, 2047] {
            cases.push(Instruction::Immediate { code, rd: 4, rs: 5, operand });
        }
    }
    for code in [Slli, Srli, Srai] {
        for operand in [0, 1, 31] {
            cases.push(Instruction::Immediate { code, rd: 6, rs: 7, operand });
        }
    }
    for code in [Lb, Lh, Lw, Ld, Lbu, Lhu, Lwu] {
        cases.push(Instruction::Immediate { code, rd: 8, rs: 9, operand: 16 });
    }
    cases.push(Instruction::Immediate { code: Jalr, rd: 1, rs: 1, operand: -4 });
    for code in [Sb, Sh, Sw, Sd] {
        cases.push(Instruction::Store { code, rbase: 10, rs: 11, offset: -32 });
    }
    for code in [Beq, Bne, Blt, Bge, Bltu, Bgeu] {
        for offset in [-4096, -4, 0, 4094] {
            cases.push(Instruction::Branch { code, rs1: 12, rs2: 13, offset });
        }
    }
    for code in [Lui, Auipc] {
        for operand in [i32::MIN, -4096, 0, 0x7FFF_F000] {
            cases.push(Instruction::UpperImmediate { code, rd: 14, operand });
        }
    }
    for offset in [-1_048_576, -4, 0, 8, 1_048_574] {
        cases.push(Instruction::Jump { code: Jal, rd: 1, offset });
    }
    cases.push(Instruction::Immediate { code: Ecall, rd: 0, rs: 0, operand: 0 });
    cases.push(Instruction::Immediate { code: Ebreak, rd: 0, rs: 0, operand: 1 });
    cases.push(Instruction::Immediate { code: Fence, rd: 0, rs: 0, operand: 0 });
    cases.push(Instruction::Immediate { code: FenceI, rd: 0, rs: 0, operand: 0 });

    for case in cases {
        let word = encoder::encode(&case).expect("encode");
        assert_eq!(decoder::decode(word), case, "word {word:#010x}");
    }
}

#[test]
fn decodable_words_round_trip_through_decoding() {
    // deterministic xorshift sweep over the word space
    let mut x = 0x1234_5678u32;
    let mut decoded = 0u32;
    for _ in 0..200_000 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        let instr = decoder::decode(x);
        if !matches!(instr, Instruction::Error { .. }) {
            decoded += 1;
            assert_eq!(encoder::encode(&instr).unwrap(), x, "word {x:#010x}");
        }
    }
    assert!(decoded > 1000, "sweep decoded too few words ({decoded})");
}

#[test]
fn disassembly_reassembles_to_the_same_bytes() {
    let src = "
        li   x1, 0x1234
        la   x6, store_it
        addi x2, x0, 5
    top:
        addi x3, x3, 1
        slli x4, x3, 2
        blt  x3, x2, top
        beqz x4, top
    store_it:
        sw   x1, 16(x0)
        lw   x7, 16(x0)
        srai x7, x7, 4
        jalr x0, x6, 0
        fence.i
        ecall
        jal  x0, end
        nop
    end:
        ret
    ";
    let words = assemble(src).expect("assemble");
    let text = disasm::format(&disasm::disassemble(&words));
    let reassembled = assemble(&text).expect("reassemble disassembly");
    assert_eq!(words, reassembled, "listing was:\n{text}");
}

#[test]
fn arbitrary_bytes_always_disassemble() {
    // the decoder is total, so the formatter must cope with anything
    let mut x = 0xDEAD_BEEFu32;
    let words: Vec<u32> = (0..64)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x
        })
        .collect();
    let text = disasm::format(&disasm::disassemble(&words));
    assert!(text.lines().count() >= 64);
}
