//! Parser for cleaned image lines → bytes.

use crate::error::LoadError;

/// Parse one cleaned line as a byte written in binary, most significant
/// bit first.
///
/// The token must be exactly eight `0`/`1` digits.
pub(crate) fn parse_byte(token: &str, line_num: usize) -> Result<u8, LoadError> {
    let invalid = || LoadError::InvalidByte {
        line: line_num,
        token: token.to_string(),
    };

    if token.len() != 8 || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }
    u8::from_str_radix(token, 2).map_err(|_| invalid())
}
