//! The general-purpose register file.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer: the stack grows down from here, leaving
/// `0xF4..=0xFF` free above it.
pub const STACK_START: u8 = 0xF4;

/// Eight 8-bit registers, R0-R7. R7 is the stack pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    slots: [u8; REGISTER_COUNT],
}

impl Registers {
    /// All registers zero except the stack pointer, which starts at
    /// [`STACK_START`].
    pub fn new() -> Self {
        let mut slots = [0; REGISTER_COUNT];
        slots[SP as usize] = STACK_START;
        Self { slots }
    }

    /// Value of register `index`, or `None` past R7.
    pub fn get(&self, index: u8) -> Option<u8> {
        self.slots.get(index as usize).copied()
    }

    /// Mutable slot for register `index`, or `None` past R7.
    pub fn get_mut(&mut self, index: u8) -> Option<&mut u8> {
        self.slots.get_mut(index as usize)
    }

    pub fn sp(&self) -> u8 {
        self.slots[SP as usize]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.slots[SP as usize] = value;
    }

    /// Copy of all eight registers, R0 first.
    pub fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.slots
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
