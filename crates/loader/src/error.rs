//! Error types for the LS-8 program image loader.

use thiserror::Error;

/// Errors produced while reading a program image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A line was not exactly eight binary digits.
    #[error("line {line}: expected 8 binary digits, found '{token}'")]
    InvalidByte { line: usize, token: String },

    /// The image holds more bytes than memory.
    #[error("program is {len} bytes; memory holds 256")]
    ProgramTooLarge { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_byte() {
        let e = LoadError::InvalidByte {
            line: 3,
            token: "1002".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: expected 8 binary digits, found '1002'");
    }

    #[test]
    fn error_display_program_too_large() {
        let e = LoadError::ProgramTooLarge { len: 300 };
        assert_eq!(e.to_string(), "program is 300 bytes; memory holds 256");
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = LoadError::InvalidByte {
            line: 1,
            token: "X".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
