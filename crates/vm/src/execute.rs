//! Fetch-decode-execute loop and opcode dispatch for the LS-8 CPU.

use std::io::Write;

use crate::alu::AluOp;
use crate::config::JumpMode;
use crate::error::RuntimeError;
use crate::machine::Cpu;
use ls8_common::{Instruction, Opcode};

/// What the loop does with the program counter after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Move past the instruction, by its length in bytes.
    Advance(usize),
    /// Continue at an address set by the handler.
    Jump(usize),
    /// Stop. The program counter still moves past the HLT byte.
    Halt,
}

impl Cpu {
    /// Run until HLT or error, writing PRN output to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        while !self.halted {
            self.step(out)?;
        }
        log::debug!("halted at pc {:#04x} after {} steps", self.pc, self.steps);
        Ok(())
    }

    /// Execute exactly one instruction. Does nothing once halted.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        if self.halted {
            return Ok(());
        }
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        log::trace!(target: "ls8_vm::trace", "{}", self.trace());

        let instr = self.decode()?;
        let flow = self.dispatch(&instr, out)?;
        self.advance(&instr, flow);
        self.steps += 1;
        Ok(())
    }

    /// Decode the instruction at the program counter.
    ///
    /// Always reads the two bytes after the opcode, whether or not the
    /// opcode uses them.
    pub fn decode(&self) -> Result<Instruction, RuntimeError> {
        let opcode = self.memory.read(self.pc)?;
        let operand_a = self.memory.read(self.pc + 1)?;
        let operand_b = self.memory.read(self.pc + 2)?;

        Instruction::decode([opcode, operand_a, operand_b]).map_err(|_| {
            RuntimeError::UnrecognizedOpcode {
                opcode,
                pc: self.pc,
                registers: self.registers.snapshot(),
            }
        })
    }

    fn dispatch<W: Write>(
        &mut self,
        instr: &Instruction,
        out: &mut W,
    ) -> Result<Flow, RuntimeError> {
        let next = Flow::Advance(instr.encoded_len());

        match instr.opcode {
            Opcode::Hlt => return Ok(Flow::Halt),
            Opcode::Ldi => self.set_reg(instr.operand_a, instr.operand_b)?,
            Opcode::Prn => self.exec_prn(instr.operand_a, out)?,
            Opcode::Mul => self.alu(AluOp::Mul, instr.operand_a, instr.operand_b)?,
            Opcode::Psh => {
                let value = self.reg(instr.operand_a)?;
                self.push(value)?;
            }
            Opcode::Pop => {
                let value = self.pop()?;
                self.set_reg(instr.operand_a, value)?;
            }
            Opcode::Call => return self.exec_call(instr),
            Opcode::Ret => return Ok(Flow::Jump(self.pop()? as usize)),
        }

        Ok(next)
    }

    fn advance(&mut self, instr: &Instruction, flow: Flow) {
        match flow {
            Flow::Advance(len) => self.pc += len,
            Flow::Jump(target) => {
                self.pc = match self.config.jump_mode {
                    JumpMode::Direct => target,
                    JumpMode::AdvanceAfterJump => target + instr.encoded_len(),
                };
            }
            Flow::Halt => {
                self.halted = true;
                self.pc += instr.encoded_len();
            }
        }
    }

    fn exec_prn<W: Write>(&mut self, reg: u8, out: &mut W) -> Result<(), RuntimeError> {
        let value = self.reg(reg)?;
        writeln!(out, "{value}").map_err(|e| RuntimeError::Output {
            pc: self.pc,
            message: e.to_string(),
        })
    }

    /// Push the address of the next instruction, then jump to the address
    /// held in the register. The register is read after the push, so
    /// `CALL R7` jumps to the decremented stack pointer.
    fn exec_call(&mut self, instr: &Instruction) -> Result<Flow, RuntimeError> {
        let return_addr = self.pc + instr.encoded_len();
        let return_byte = u8::try_from(return_addr)
            .map_err(|_| RuntimeError::AddressOutOfRange { address: return_addr })?;
        self.push(return_byte)?;
        let target = self.reg(instr.operand_a)? as usize;
        Ok(Flow::Jump(target))
    }
}
