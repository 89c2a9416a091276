//! Run configuration.

/// How the program counter moves after an instruction that jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpMode {
    /// CALL and RET set the program counter and nothing else.
    #[default]
    Direct,
    /// After CALL or RET set the program counter, it is advanced by the
    /// instruction length as for any other instruction. A call lands two
    /// bytes past its target and a return one byte past its return address.
    /// Matches the LS-8 reference emulator bit for bit.
    AdvanceAfterJump,
}

/// Settings for one run of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub jump_mode: JumpMode,
    /// Abort with `StepLimitExceeded` after this many instructions.
    pub step_limit: Option<u64>,
}

impl RunConfig {
    pub fn with_jump_mode(mut self, jump_mode: JumpMode) -> Self {
        self.jump_mode = jump_mode;
        self
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}
