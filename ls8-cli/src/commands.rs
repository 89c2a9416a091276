//! CLI command implementations.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use ls8_common::Program;
use ls8_vm::{Cpu, JumpMode, RunConfig, RuntimeError};

/// Arguments for `ls8 run`.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Path to the program image
    pub image: PathBuf,

    /// Log the CPU state before every instruction
    #[arg(long)]
    pub trace: bool,

    /// Advance the program counter after CALL and RET, as the reference
    /// emulator does
    #[arg(long)]
    pub legacy_jumps: bool,

    /// Abort after this many instructions
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,
}

impl RunArgs {
    fn config(&self) -> RunConfig {
        let jump_mode = if self.legacy_jumps {
            JumpMode::AdvanceAfterJump
        } else {
            JumpMode::Direct
        };
        let config = RunConfig::default().with_jump_mode(jump_mode);
        match self.max_steps {
            Some(limit) => config.with_step_limit(limit),
            None => config,
        }
    }
}

/// Read and parse a program image file.
fn read_image(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    ls8_loader::parse_image(&text).map_err(|e| {
        eprintln!("error: {}: {e}", path.display());
        1
    })
}

/// Load a program image and run it, printing PRN output to stdout.
pub fn run(args: &RunArgs) -> Result<(), i32> {
    let program = read_image(&args.image)?;

    let mut cpu = Cpu::with_config(args.config());
    cpu.load(&program).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    info!(
        "running {} ({} bytes, {:?} jumps)",
        args.image.display(),
        program.len(),
        cpu.config().jump_mode
    );

    let stdout = io::stdout();
    let result = run_to(&mut cpu, &mut stdout.lock());

    match result {
        Ok(()) => {
            info!("halted after {} steps", cpu.steps());
            Ok(())
        }
        Err(e) => {
            if matches!(e, RuntimeError::UnrecognizedOpcode { .. }) {
                eprintln!("{}", cpu.trace());
            }
            eprintln!("runtime error: {e}");
            Err(2)
        }
    }
}

/// Run to HLT, then flush `out`. A failed flush is an output error like a
/// failed PRN write.
fn run_to<W: Write>(cpu: &mut Cpu, out: &mut W) -> Result<(), RuntimeError> {
    cpu.run(out)?;
    out.flush().map_err(|e| RuntimeError::Output {
        pc: cpu.pc(),
        message: e.to_string(),
    })
}

/// Print the disassembly of a program image.
pub fn disassemble(image: &Path) -> Result<(), i32> {
    let program = read_image(image)?;
    print!("{}", ls8_loader::disassemble(&program));
    Ok(())
}
