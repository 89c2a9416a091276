//! CPU state: memory, registers, program counter, halted flag.

use crate::config::RunConfig;
use crate::error::RuntimeError;
use crate::memory::Memory;
use crate::registers::Registers;
use ls8_common::Program;

/// The LS-8 CPU.
///
/// One `Cpu` owns all machine state. Nothing is shared or global, so a
/// fresh value is a fresh machine.
#[derive(Debug, Clone)]
pub struct Cpu {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    /// Address of the next instruction byte. Wider than a byte so that
    /// operand fetches past address 255 are representable and fail.
    pub(crate) pc: usize,
    pub(crate) halted: bool,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    pub(crate) config: RunConfig,
}

impl Cpu {
    /// Create a CPU with the default run configuration.
    pub fn new() -> Self {
        Self::with_config(RunConfig::default())
    }

    /// Create a CPU with the given run configuration.
    pub fn with_config(config: RunConfig) -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            pc: 0,
            halted: false,
            steps: 0,
            config,
        }
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.memory.load(program)?;
        log::debug!("loaded {} byte program", program.len());
        Ok(())
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Read register `index`, failing past R7.
    pub fn reg(&self, index: u8) -> Result<u8, RuntimeError> {
        self.registers
            .get(index)
            .ok_or(RuntimeError::InvalidRegister { index, pc: self.pc })
    }

    /// Write register `index`, failing past R7.
    pub fn set_reg(&mut self, index: u8, value: u8) -> Result<(), RuntimeError> {
        let pc = self.pc;
        let slot = self
            .registers
            .get_mut(index)
            .ok_or(RuntimeError::InvalidRegister { index, pc })?;
        *slot = value;
        Ok(())
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
