//! LS-8 program image loader and disassembler.
//!
//! A program image is text, one byte per line, written as eight binary
//! digits. `#` starts a comment; blank lines are skipped. Bytes land at
//! consecutive addresses starting from 0.
//!
//! # Usage
//!
//! ```
//! use ls8_loader::{disassemble, parse_image};
//!
//! let text = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//! let program = parse_image(text).unwrap();
//! assert_eq!(program.len(), 6);
//! assert_eq!(disassemble(&program), "00: LDI R0, 8\n03: PRN R0\n05: HLT\n");
//! ```

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::disassemble;
pub use error::LoadError;

use lexer::clean_line;
use ls8_common::Program;
use parser::parse_byte;

/// Parse program image text into a program.
///
/// Returns the first error encountered.
pub fn parse_image(text: &str) -> Result<Program, LoadError> {
    let mut bytes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        if let Some(token) = clean_line(line) {
            bytes.push(parse_byte(token, line_num)?);
        }
    }

    let program = Program::new(bytes);
    if !program.fits_in_memory() {
        return Err(LoadError::ProgramTooLarge { len: program.len() });
    }

    log::debug!("parsed {} byte program image", program.len());
    Ok(program)
}
