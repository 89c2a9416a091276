//! Decode errors for LS-8 instruction bytes.

use thiserror::Error;

/// Errors that occur while decoding an instruction byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte does not name any opcode in the instruction set.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),
}
