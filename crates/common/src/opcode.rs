//! Opcode definitions for the LS-8 instruction set.
//!
//! The two most-significant bits of every opcode byte hold the number of
//! operand bytes that follow it. An instruction is therefore
//! `(byte >> 6) + 1` bytes long, whatever the opcode does.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` attribute pins each variant to its encoded byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Halt the CPU.
    Hlt = 0b0000_0001,
    /// Load an immediate into a register. `LDI reg, imm`.
    Ldi = 0b1000_0010,
    /// Print a register as a decimal integer. `PRN reg`.
    Prn = 0b0100_0111,
    /// Multiply two registers, result in the first. `MUL reg_a, reg_b`.
    Mul = 0b1010_0010,
    /// Push a register onto the stack. `PSH reg`.
    Psh = 0b0100_0101,
    /// Pop the top of the stack into a register. `POP reg`.
    Pop = 0b0100_0110,
    /// Push the return address and jump to the address in a register.
    Call = 0b0101_0000,
    /// Pop the return address into the program counter.
    Ret = 0b0001_0001,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 8] = [
    Opcode::Hlt,
    Opcode::Ldi,
    Opcode::Prn,
    Opcode::Mul,
    Opcode::Psh,
    Opcode::Pop,
    Opcode::Call,
    Opcode::Ret,
];

/// Number of operand bytes encoded in the high two bits of `byte`.
///
/// Defined for every byte, recognized or not, so the decoder can size an
/// instruction before looking it up.
pub const fn operand_count(byte: u8) -> usize {
    (byte >> 6) as usize
}

/// Total instruction length in bytes (opcode plus operands) for `byte`.
pub const fn instruction_len(byte: u8) -> usize {
    operand_count(byte) + 1
}

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b0000_0001 => Ok(Opcode::Hlt),
            0b1000_0010 => Ok(Opcode::Ldi),
            0b0100_0111 => Ok(Opcode::Prn),
            0b1010_0010 => Ok(Opcode::Mul),
            0b0100_0101 => Ok(Opcode::Psh),
            0b0100_0110 => Ok(Opcode::Pop),
            0b0101_0000 => Ok(Opcode::Call),
            0b0001_0001 => Ok(Opcode::Ret),
            _ => Err(DecodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Mul => "MUL",
            Opcode::Psh => "PSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
        }
    }

    /// Number of operand bytes this opcode consumes.
    pub fn operand_count(&self) -> usize {
        operand_count(*self as u8)
    }

    /// Instruction length in bytes, opcode included.
    pub fn encoded_len(&self) -> usize {
        instruction_len(*self as u8)
    }
}
