//! LS-8 CLI: run and disassemble program images.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input/load error
//! - 2: Runtime error

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

/// LS-8 8-bit CPU emulator
#[derive(Parser, Debug)]
#[command(name = "ls8", version, about = "LS-8 8-bit CPU emulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a program image and run it until HLT
    Run(commands::RunArgs),
    /// Print the disassembly of a program image
    Disassemble {
        /// Path to the program image
        image: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(&cli);

    let result = match &cli.command {
        Command::Run(args) => commands::run(args),
        Command::Disassemble { image } => commands::disassemble(image),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Warnings only by default; `-v`/`-vv` raise the level and `--trace`
/// enables the per-instruction trace. `RUST_LOG` overrides both.
fn init_logging(cli: &Cli) {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match &cli.command {
        Command::Run(args) if args.trace => format!("{level},ls8_vm::trace=trace"),
        _ => level.to_string(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .init();
}
