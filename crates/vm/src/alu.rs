//! Arithmetic unit.
//!
//! Results are 8-bit: every operation wraps modulo 256.

use std::fmt;
use std::str::FromStr;

use crate::error::RuntimeError;
use crate::machine::Cpu;

/// An ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
}

impl AluOp {
    /// Apply the operation to two register values.
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Mul => "MUL",
        }
    }
}

impl FromStr for AluOp {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(AluOp::Add),
            "MUL" => Ok(AluOp::Mul),
            other => Err(RuntimeError::UnsupportedAluOperation {
                op: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Cpu {
    /// `reg[reg_a] = reg[reg_a] <op> reg[reg_b]`.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), RuntimeError> {
        let a = self.reg(reg_a)?;
        let b = self.reg(reg_b)?;
        self.set_reg(reg_a, op.apply(a, b))
    }

    /// [`Cpu::alu`] with the operation given by name (`"ADD"`, `"MUL"`).
    pub fn alu_named(&mut self, op: &str, reg_a: u8, reg_b: u8) -> Result<(), RuntimeError> {
        self.alu(op.parse()?, reg_a, reg_b)
    }
}
