//! Push and pop on the memory stack addressed by R7.
//!
//! The stack grows toward lower addresses. There is no overflow or
//! underflow check; the stack pointer is an 8-bit register and wraps.
//! It can never point outside memory, so a stack walk off either end
//! silently continues at the other end instead of failing with
//! [`RuntimeError::AddressOutOfRange`].

use crate::error::RuntimeError;
use crate::machine::Cpu;

impl Cpu {
    /// Decrement SP, then store `value` at the new SP.
    pub fn push(&mut self, value: u8) -> Result<(), RuntimeError> {
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.memory.write(sp as usize, value)
    }

    /// Load the byte at SP, then increment SP.
    ///
    /// A pop at SP = 0xFF wraps SP to 0x00, and the next pop reads
    /// address 0 rather than faulting.
    pub fn pop(&mut self) -> Result<u8, RuntimeError> {
        let sp = self.registers.sp();
        let value = self.memory.read(sp as usize)?;
        self.registers.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}
