use std::collections::{BTreeMap, BTreeSet};

use crate::rv::decoder;
use crate::rv::instruction::Instruction;
use crate::rv::opcode::Opcode;

pub fn disassemble(words: &[u32]) -> Vec<Instruction> {
    words.iter().map(|w| decoder::decode(*w)).collect()
}

/// Plain assembly text with `L_<n>` labels in place of in-range branch and
/// jump offsets. Feeding this back to the assembler reproduces the input
/// words.
pub fn format(instrs: &[Instruction]) -> String {
    let labels = label_targets(instrs);
    let mut out = String::new();
    for (idx, instr) in instrs.iter().enumerate() {
        if let Some(label) = labels.get(&idx) {
            out.push_str(label);
            out.push_str(":\n");
        }
        out.push_str("    ");
        out.push_str(&pretty(idx, instr, &labels, instrs.len()));
        out.push('\n');
    }
    out
}

/// Like `format`, with a hex address column for human consumption.
pub fn listing(instrs: &[Instruction]) -> String {
    let labels = label_targets(instrs);
    let max_addr = instrs.len().saturating_sub(1) * 4;
    let width = format!("{max_addr:x}").len();
    let mut out = String::new();
    for (idx, instr) in instrs.iter().enumerate() {
        if let Some(label) = labels.get(&idx) {
            out.push_str(label);
            out.push_str(":\n");
        }
        let addr = idx * 4;
        out.push_str(&format!(
            "0x{addr:0width$x}: {}\n",
            pretty(idx, instr, &labels, instrs.len())
        ));
    }
    out
}

/// One pass over the buffer: every jump-like target that lands on a word
/// inside it gets a symbolic name. Ordinals follow address order and are
/// zero-padded to a common width.
fn label_targets(instrs: &[Instruction]) -> BTreeMap<usize, String> {
    let mut targets = BTreeSet::new();
    for (idx, instr) in instrs.iter().enumerate() {
        if let Some(t) = instr
            .jump_offset()
            .and_then(|offset| in_range_target(idx, offset, instrs.len()))
        {
            targets.insert(t);
        }
    }
    let width = targets.len().saturating_sub(1).to_string().len();
    targets
        .into_iter()
        .enumerate()
        .map(|(ord, t)| (t, format!("L_{ord:0width$}")))
        .collect()
}

fn in_range_target(idx: usize, offset: i32, count: usize) -> Option<usize> {
    let t = idx as i64 * 4 + offset as i64;
    if (0..count as i64 * 4).contains(&t) && t % 4 == 0 {
        Some(t as usize / 4)
    } else {
        None
    }
}

fn pretty(
    idx: usize,
    instr: &Instruction,
    labels: &BTreeMap<usize, String>,
    count: usize,
) -> String {
    use Instruction::*;
    match *instr {
        Register { code, rd, rs1, rs2 } => {
            format!("{} x{rd}, x{rs1}, x{rs2}", code.mnemonic())
        }
        Immediate { code, rd, rs, operand } => match code {
            Opcode::Addi if rd == 0 && rs == 0 && operand == 0 => "nop".into(),
            Opcode::Fence | Opcode::FenceI | Opcode::Ecall | Opcode::Ebreak => {
                code.mnemonic().into()
            }
            c if c.is_load() => format!("{} x{rd}, {operand}(x{rs})", c.mnemonic()),
            Opcode::Jalr => format!("jalr x{rd}, x{rs}, {operand}"),
            _ => format!("{} x{rd}, x{rs}, {operand}", code.mnemonic()),
        },
        Store { code, rbase, rs, offset } => {
            format!("{} x{rs}, {offset}(x{rbase})", code.mnemonic())
        }
        Branch { code, rs1, rs2, offset } => format!(
            "{} x{rs1}, x{rs2}, {}",
            code.mnemonic(),
            target_text(idx, offset, labels, count)
        ),
        UpperImmediate { code, rd, operand } => {
            format!("{} x{rd}, {}", code.mnemonic(), operand >> 12)
        }
        Jump { rd, offset, .. } => {
            format!("jal x{rd}, {}", target_text(idx, offset, labels, count))
        }
        Error { raw: 0 } => "nop".into(),
        Error { raw } => {
            let b = raw.to_le_bytes();
            format!("<{:02x} {:02x} {:02x} {:02x}>", b[0], b[1], b[2], b[3])
        }
    }
}

fn target_text(
    idx: usize,
    offset: i32,
    labels: &BTreeMap<usize, String>,
    count: usize,
) -> String {
    if let Some(label) = in_range_target(idx, offset, count).and_then(|t| labels.get(&t)) {
        return label.clone();
    }
    format!("{offset}  # WARNING: target outside of loaded code")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rv::asm::assemble;

    #[test]
    fn labels_are_generated_for_in_range_targets() {
        // jal x0, +8; nop; nop
        let words = assemble("jal x0, 8\nnop\nnop").unwrap();
        let text = format(&disassemble(&words));
        assert_eq!(text, "    jal x0, L_0\n    nop\nL_0:\n    nop\n");
    }

    #[test]
    fn out_of_range_targets_keep_the_raw_offset() {
        let words = assemble("jal x0, 64").unwrap();
        let text = format(&disassemble(&words));
        assert!(text.contains("jal x0, 64  # WARNING: target outside of loaded code"));
    }

    #[test]
    fn shared_targets_share_one_label() {
        let words = assemble("beq x0, x0, 8\njal x0, 4\nnop").unwrap();
        let instrs = disassemble(&words);
        let text = format(&instrs);
        assert_eq!(text.matches("L_0:").count(), 1);
        assert!(text.contains("beq x0, x0, L_0"));
        assert!(text.contains("jal x0, L_0"));
    }

    #[test]
    fn zero_words_and_canonical_addi_render_as_nop() {
        let instrs = disassemble(&[0, 0x0000_0013]);
        let text = format(&instrs);
        assert_eq!(text, "    nop\n    nop\n");
    }

    #[test]
    fn unknown_words_render_as_raw_bytes() {
        let text = format(&disassemble(&[0xFFFF_FFFF]));
        assert_eq!(text, "    <ff ff ff ff>\n");
    }

    #[test]
    fn listing_pads_addresses_to_a_common_width() {
        let words = assemble("nop\n".repeat(5).as_str()).unwrap();
        let text = listing(&disassemble(&words));
        assert!(text.starts_with("0x00: nop\n"));
        assert!(text.contains("0x10: nop\n"));
    }
}
