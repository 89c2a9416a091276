//! Line cleanup for LS-8 program images.

/// Strip the comment and surrounding whitespace from one image line.
///
/// Returns `None` for blank lines and comment-only lines. Comments start
/// with `#` and extend to end of line.
pub(crate) fn clean_line(line: &str) -> Option<&str> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line() {
        assert_eq!(clean_line(""), None);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(clean_line("   \t  "), None);
    }

    #[test]
    fn comment_only() {
        assert_eq!(clean_line("# print8.ls8"), None);
    }

    #[test]
    fn byte_with_comment() {
        assert_eq!(clean_line("10000010 # LDI R0,8"), Some("10000010"));
    }

    #[test]
    fn indented_byte() {
        assert_eq!(clean_line("\t00000001\r"), Some("00000001"));
    }

    #[test]
    fn comment_directly_after_digits() {
        assert_eq!(clean_line("00001000#8"), Some("00001000"));
    }
}
