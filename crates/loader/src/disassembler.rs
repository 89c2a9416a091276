//! Disassembler: program image → annotated assembly text.
//!
//! One line per instruction, prefixed with its two-digit hex address.
//! Bytes that do not start a complete instruction are shown as `.byte`
//! and disassembly resumes at the next address.

use ls8_common::{Opcode, Program};

/// Disassemble a program image.
pub fn disassemble(program: &Program) -> String {
    let bytes = &program.bytes;
    let mut lines = Vec::new();
    let mut addr = 0;

    while addr < bytes.len() {
        let byte = bytes[addr];
        let decoded = Opcode::try_from(byte)
            .ok()
            .filter(|op| addr + op.encoded_len() <= bytes.len());

        let Some(opcode) = decoded else {
            lines.push(format!("{addr:02X}: .byte {byte:#04x}"));
            addr += 1;
            continue;
        };

        let operands = &bytes[addr + 1..addr + opcode.encoded_len()];
        let text = match opcode {
            Opcode::Hlt | Opcode::Ret => opcode.mnemonic().to_string(),
            Opcode::Prn | Opcode::Psh | Opcode::Pop | Opcode::Call => {
                format!("{} R{}", opcode.mnemonic(), operands[0])
            }
            Opcode::Ldi => format!("{} R{}, {}", opcode.mnemonic(), operands[0], operands[1]),
            Opcode::Mul => format!("{} R{}, R{}", opcode.mnemonic(), operands[0], operands[1]),
        };

        lines.push(format!("{addr:02X}: {text}"));
        addr += opcode.encoded_len();
    }

    let mut result = lines.join("\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}
