//! LS-8 virtual CPU. Executes program images one instruction at a time.
//!
//! The CPU has:
//! - 256 bytes of RAM shared by program, data and stack
//! - Eight 8-bit registers, R7 doubling as the stack pointer (starts at `0xF4`)
//! - A program counter and a halted flag
//!
//! Each step decodes the opcode at PC plus the two bytes after it,
//! dispatches on the opcode, and moves PC according to the handler's
//! [`Flow`]. How CALL and RET move PC is set by [`JumpMode`].
//!
//! # Usage
//!
//! ```
//! use ls8_common::{Instruction, Opcode, Program};
//!
//! let program = Program::from_instructions(&[
//!     Instruction::new(Opcode::Ldi, 0, 8),
//!     Instruction::new(Opcode::Ldi, 1, 9),
//!     Instruction::new(Opcode::Mul, 0, 1),
//!     Instruction::new(Opcode::Prn, 0, 0),
//!     Instruction::new(Opcode::Hlt, 0, 0),
//! ]);
//!
//! let mut out: Vec<u8> = Vec::new();
//! let cpu = ls8_vm::run(&program, &mut out).unwrap();
//! assert_eq!(out, b"72\n");
//! assert!(cpu.is_halted());
//! ```

pub mod alu;
pub mod config;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod registers;
pub mod stack;
pub mod trace;

pub use alu::AluOp;
pub use config::{JumpMode, RunConfig};
pub use error::RuntimeError;
pub use execute::Flow;
pub use machine::Cpu;
pub use memory::Memory;
pub use registers::{Registers, REGISTER_COUNT, SP, STACK_START};
pub use trace::Trace;

use std::io::Write;

use ls8_common::Program;

/// Load and run a program with the default configuration.
///
/// Returns the halted CPU so callers can inspect its final state.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the program does not fit in memory or
/// execution faults (unrecognized opcode, out-of-range access, etc.).
pub fn run<W: Write>(program: &Program, out: &mut W) -> Result<Cpu, RuntimeError> {
    run_with_config(program, RunConfig::default(), out)
}

/// Load and run a program with an explicit configuration.
pub fn run_with_config<W: Write>(
    program: &Program,
    config: RunConfig,
    out: &mut W,
) -> Result<Cpu, RuntimeError> {
    let mut cpu = Cpu::with_config(config);
    cpu.load(program)?;
    cpu.run(out)?;
    Ok(cpu)
}
