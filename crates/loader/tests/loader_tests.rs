//! Integration tests for the LS-8 loader.
//!
//! Tests cover:
//! - Every program in tests/programs (parse, disassemble, execute)
//! - Error cases (malformed lines, oversized images)

use ls8_common::Program;
use ls8_loader::{disassemble, parse_image, LoadError};
use ls8_vm::{run_with_config, JumpMode, RunConfig, RuntimeError};
use std::fs;
use std::path::{Path, PathBuf};

// ---- Test helpers ----

/// Return the absolute path to a test program file.
fn test_program(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/programs")
        .join(name)
}

fn load(name: &str) -> Program {
    let text = fs::read_to_string(test_program(name)).unwrap();
    parse_image(&text).unwrap()
}

fn execute(program: &Program, config: RunConfig) -> (Result<(), RuntimeError>, String) {
    let mut out: Vec<u8> = Vec::new();
    let result = run_with_config(program, config, &mut out).map(|_| ());
    (result, String::from_utf8(out).unwrap())
}

// ---- Fixture programs ----

#[test]
fn print8_program() {
    let program = load("print8.ls8");
    assert_eq!(program.bytes, vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 1]);
    let (result, out) = execute(&program, RunConfig::default());
    result.unwrap();
    assert_eq!(out, "8\n");
}

#[test]
fn mult_program() {
    let program = load("mult.ls8");
    assert_eq!(
        disassemble(&program),
        "00: LDI R0, 8\n03: LDI R1, 9\n06: MUL R0, R1\n09: PRN R0\n0B: HLT\n"
    );
    let (result, out) = execute(&program, RunConfig::default());
    result.unwrap();
    assert_eq!(out, "72\n");
}

#[test]
fn stack_program() {
    let (result, out) = execute(&load("stack.ls8"), RunConfig::default());
    result.unwrap();
    assert_eq!(out, "2\n4\n1\n");
}

#[test]
fn call_program() {
    let program = load("call.ls8");
    assert_eq!(program.len(), 33);
    let (result, out) = execute(&program, RunConfig::default());
    result.unwrap();
    assert_eq!(out, "20\n30\n36\n60\n");
}

#[test]
fn call_program_disassembly_tail() {
    let text = disassemble(&load("call.ls8"));
    assert!(text.ends_with("1A: HLT\n1B: MUL R0, R2\n1E: PRN R0\n20: RET\n"));
}

#[test]
fn legacy_call_program() {
    let program = load("legacy_call.ls8");
    let legacy = RunConfig::default().with_jump_mode(JumpMode::AdvanceAfterJump);
    let (result, out) = execute(&program, legacy);
    result.unwrap();
    assert_eq!(out, "99\n");
}

#[test]
fn legacy_layout_faults_with_direct_jumps() {
    let (result, _) = execute(&load("legacy_call.ls8"), RunConfig::default());
    assert!(matches!(
        result,
        Err(RuntimeError::UnrecognizedOpcode { opcode: 0, pc: 16, .. })
    ));
}

#[test]
fn bad_opcode_program() {
    let (result, out) = execute(&load("bad_opcode.ls8"), RunConfig::default());
    assert_eq!(
        result,
        Err(RuntimeError::UnrecognizedOpcode {
            opcode: 0xFF,
            pc: 3,
            registers: [8, 0, 0, 0, 0, 0, 0, 0xF4],
        })
    );
    assert_eq!(out, "");
}

// ---- Error cases ----

#[test]
fn error_decimal_literal() {
    let err = parse_image("10000010\n0\n8\n").unwrap_err();
    assert_eq!(
        err,
        LoadError::InvalidByte {
            line: 2,
            token: "0".to_string()
        }
    );
}

#[test]
fn error_mnemonic_instead_of_byte() {
    let err = parse_image("# header\nLDI R0,8\n").unwrap_err();
    assert!(matches!(err, LoadError::InvalidByte { line: 2, .. }));
}

#[test]
fn error_oversized_image() {
    let text = "00000001\n".repeat(300);
    assert_eq!(
        parse_image(&text),
        Err(LoadError::ProgramTooLarge { len: 300 })
    );
}
