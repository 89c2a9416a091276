//! Runtime errors for the LS-8 CPU.
//!
//! Every error is fatal to the run: the instruction set has no way to
//! catch or recover from a fault. Errors raised while executing an
//! instruction carry the program counter (`pc`) for debugging.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Memory read or write outside addresses 0-255.
    #[error("memory address {address:#04x} out of range")]
    AddressOutOfRange { address: usize },

    /// The byte at `pc` is not an opcode. `registers` is the register file
    /// at the time of the fault.
    #[error("unrecognized instruction {opcode:#010b} at pc {pc:#04x}")]
    UnrecognizedOpcode {
        opcode: u8,
        pc: usize,
        registers: [u8; 8],
    },

    /// The ALU was asked for an operation it does not implement.
    #[error("unsupported ALU operation '{op}'")]
    UnsupportedAluOperation { op: String },

    /// A register operand named a register beyond R7.
    #[error("invalid register R{index} at pc {pc:#04x}")]
    InvalidRegister { index: u8, pc: usize },

    /// Program image larger than memory.
    #[error("program of {len} bytes does not fit in 256 bytes of memory")]
    ProgramTooLarge { len: usize },

    /// PRN could not write to the output sink.
    #[error("output failed at pc {pc:#04x}: {message}")]
    Output { pc: usize, message: String },

    /// The run configuration's step limit was reached before HLT.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}
