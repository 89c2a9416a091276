//! Instruction layout for the LS-8 instruction set.
//!
//! An instruction is one opcode byte followed by zero, one or two operand
//! bytes:
//! ```text
//! Byte 0: opcode    (two high bits = operand count)
//! Byte 1: operand_a (register index or immediate, if used)
//! Byte 2: operand_b (register index or immediate, if used)
//! ```
//! The decoder always carries both operand slots. Handlers for shorter
//! instructions ignore the bytes they do not use.

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// A decoded LS-8 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// First operand byte. Meaning depends on opcode.
    pub operand_a: u8,
    /// Second operand byte. Meaning depends on opcode.
    pub operand_b: u8,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, operand_a: u8, operand_b: u8) -> Self {
        Self {
            opcode,
            operand_a,
            operand_b,
        }
    }

    /// Decode an opcode byte and the two raw bytes that follow it.
    ///
    /// Both operand bytes are kept even when the opcode uses fewer.
    pub fn decode(bytes: [u8; 3]) -> Result<Self, DecodeError> {
        let opcode = Opcode::try_from(bytes[0])?;
        Ok(Self::new(opcode, bytes[1], bytes[2]))
    }

    /// Encode to exactly `opcode.encoded_len()` bytes.
    ///
    /// Operand slots the opcode does not use are dropped, so
    /// `Instruction::new(Opcode::Hlt, 7, 7).encode()` is a single byte.
    pub fn encode(&self) -> Vec<u8> {
        let bytes = [self.opcode as u8, self.operand_a, self.operand_b];
        bytes[..self.encoded_len()].to_vec()
    }

    /// Instruction length in bytes.
    pub fn encoded_len(&self) -> usize {
        self.opcode.encoded_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_both_operand_bytes() {
        let instr = Instruction::decode([Opcode::Prn as u8, 3, 0xAA]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Prn, 3, 0xAA));
    }

    #[test]
    fn decode_unknown_opcode() {
        assert_eq!(
            Instruction::decode([0x00, 0, 0]),
            Err(DecodeError::UnknownOpcode(0x00))
        );
    }

    #[test]
    fn encode_ldi_is_three_bytes() {
        let instr = Instruction::new(Opcode::Ldi, 0, 8);
        assert_eq!(instr.encode(), vec![0b1000_0010, 0, 8]);
    }

    #[test]
    fn encode_prn_drops_second_operand() {
        let instr = Instruction::new(Opcode::Prn, 1, 99);
        assert_eq!(instr.encode(), vec![0b0100_0111, 1]);
    }

    #[test]
    fn encode_hlt_is_one_byte() {
        let instr = Instruction::new(Opcode::Hlt, 7, 7);
        assert_eq!(instr.encode(), vec![0b0000_0001]);
        assert_eq!(instr.encoded_len(), 1);
    }

    #[test]
    fn encoded_len_matches_high_bits() {
        for &opcode in &crate::opcode::ALL_OPCODES {
            let instr = Instruction::new(opcode, 0, 0);
            assert_eq!(instr.encode().len(), ((opcode as u8) >> 6) as usize + 1);
        }
    }
}
