//! Flat 256-byte RAM.

use crate::error::RuntimeError;
use ls8_common::{Program, MEMORY_SIZE};

/// Byte-addressable memory, zero-initialized.
///
/// There is no protection: program, data and stack share the one address
/// space, and only addresses past the end are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `address`.
    pub fn read(&self, address: usize) -> Result<u8, RuntimeError> {
        self.get(address)
            .ok_or(RuntimeError::AddressOutOfRange { address })
    }

    /// Write `value` at `address`.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(RuntimeError::AddressOutOfRange { address })?;
        *cell = value;
        Ok(())
    }

    /// Non-failing read, for diagnostics.
    pub fn get(&self, address: usize) -> Option<u8> {
        self.cells.get(address).copied()
    }

    /// Copy a program image to address 0. Bytes past the image are left
    /// untouched.
    pub fn load(&mut self, program: &Program) -> Result<(), RuntimeError> {
        if !program.fits_in_memory() {
            return Err(RuntimeError::ProgramTooLarge { len: program.len() });
        }
        self.cells[..program.len()].copy_from_slice(&program.bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let mem = Memory::new();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
        assert_eq!(mem.as_slice().len(), 256);
    }

    #[test]
    fn write_then_read() {
        let mut mem = Memory::new();
        mem.write(0x80, 42).unwrap();
        assert_eq!(mem.read(0x80), Ok(42));
    }

    #[test]
    fn last_address_is_valid() {
        let mut mem = Memory::new();
        mem.write(255, 7).unwrap();
        assert_eq!(mem.read(255), Ok(7));
    }

    #[test]
    fn read_past_end_fails() {
        let mem = Memory::new();
        assert_eq!(
            mem.read(256),
            Err(RuntimeError::AddressOutOfRange { address: 256 })
        );
    }

    #[test]
    fn write_past_end_fails() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.write(1000, 1),
            Err(RuntimeError::AddressOutOfRange { address: 1000 })
        );
    }

    #[test]
    fn load_places_image_at_zero() {
        let mut mem = Memory::new();
        mem.load(&Program::new(vec![1, 2, 3])).unwrap();
        assert_eq!(&mem.as_slice()[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn load_full_memory() {
        let mut mem = Memory::new();
        mem.load(&Program::new(vec![0xAB; 256])).unwrap();
        assert_eq!(mem.read(255), Ok(0xAB));
    }

    #[test]
    fn load_oversized_image_fails() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.load(&Program::new(vec![0; 257])),
            Err(RuntimeError::ProgramTooLarge { len: 257 })
        );
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }
}
