//! One-line dumps of CPU state for debugging.

use std::fmt;

use crate::machine::Cpu;
use crate::registers::REGISTER_COUNT;

/// Snapshot of the program counter, the three bytes at PC, and the
/// register file.
///
/// Displays as `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4`. Bytes past
/// the end of memory show as `--`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub pc: usize,
    pub bytes: [Option<u8>; 3],
    pub registers: [u8; REGISTER_COUNT],
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACE: {:02X} |", self.pc)?;
        for byte in &self.bytes {
            match byte {
                Some(b) => write!(f, " {b:02X}")?,
                None => write!(f, " --")?,
            }
        }
        write!(f, " |")?;
        for reg in &self.registers {
            write!(f, " {reg:02X}")?;
        }
        Ok(())
    }
}

impl Cpu {
    /// Capture the current state for display.
    pub fn trace(&self) -> Trace {
        Trace {
            pc: self.pc,
            bytes: [
                self.memory.get(self.pc),
                self.memory.get(self.pc + 1),
                self.memory.get(self.pc + 2),
            ],
            registers: self.registers.snapshot(),
        }
    }
}
