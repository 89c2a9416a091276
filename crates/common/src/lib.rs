//! LS-8 common types and instruction encoding.
//!
//! This crate provides the data structures shared by the LS-8 interpreter,
//! loader, and command-line front end:
//!
//! - [`Opcode`]: the eight opcodes of the instruction set
//! - [`Instruction`]: an opcode plus its two raw operand bytes
//! - [`Program`]: a byte image loaded at address 0
//! - [`DecodeError`]: errors from decoding opcode bytes

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::{instruction_len, operand_count, Opcode, ALL_OPCODES};
pub use program::{Program, MEMORY_SIZE};
