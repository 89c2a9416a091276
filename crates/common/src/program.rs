//! Program images for the LS-8 CPU.
//!
//! A program is the raw byte image loaded at address 0. Instructions are
//! variable length, so the image is kept as bytes and built from
//! [`Instruction`]s by concatenating their encodings.

use crate::instruction::Instruction;

/// Number of addressable bytes on the LS-8.
pub const MEMORY_SIZE: usize = 256;

/// An LS-8 program image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The image bytes, placed at consecutive addresses from 0.
    pub bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Build a program by encoding each instruction in order.
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        let mut bytes = Vec::with_capacity(instructions.len() * 3);
        for instr in instructions {
            bytes.extend_from_slice(&instr.encode());
        }
        Self { bytes }
    }

    /// Image size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if the image fits in LS-8 memory.
    pub fn fits_in_memory(&self) -> bool {
        self.bytes.len() <= MEMORY_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn empty_program() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert!(program.fits_in_memory());
    }

    #[test]
    fn from_instructions_concatenates_encodings() {
        let program = Program::from_instructions(&[
            Instruction::new(Opcode::Ldi, 0, 8),
            Instruction::new(Opcode::Prn, 0, 0),
            Instruction::new(Opcode::Hlt, 0, 0),
        ]);
        assert_eq!(
            program.bytes,
            vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
        );
        assert_eq!(program.len(), 6);
    }

    #[test]
    fn fits_in_memory_boundary() {
        assert!(Program::new(vec![0; MEMORY_SIZE]).fits_in_memory());
        assert!(!Program::new(vec![0; MEMORY_SIZE + 1]).fits_in_memory());
    }
}
