// this_file: backends/bannerkit-core/src/input.rs

//! Validation and preparation of user-supplied text.
//!
//! Rendering itself accepts anything and skips what the font cannot draw.
//! These helpers are for front-ends that want to reject bad input up front.

use crate::error::{Error, Result};

/// Maximum accepted text length in bytes.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Check that `text` is within the length limit and holds only printable
/// ASCII and line breaks.
pub fn validate_text(text: &str) -> Result<()> {
    if text.len() > MAX_TEXT_LENGTH {
        return Err(Error::invalid_text(format!(
            "text too long: {} bytes (max: {} bytes)",
            text.len(),
            MAX_TEXT_LENGTH
        )));
    }
    if let Some((offset, ch)) = text
        .char_indices()
        .find(|&(_, ch)| !(ch == '\n' || ch == '\r' || (' '..='~').contains(&ch)))
    {
        return Err(Error::invalid_text(format!(
            "unsupported character {ch:?} at byte {offset}"
        )));
    }
    Ok(())
}

/// Replace the literal two-character sequences `\n`, `\t` and `\r` with the
/// characters they name.
pub fn interpret_escapes(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
}

/// Drop one trailing line ending (`\r\n`, `\n` or `\r`), as added by
/// `echo` or an editor when text arrives on stdin.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

/// True when `text` has nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert!(validate_text("Hello\nWorld").is_ok());
        assert!(validate_text("Hello\r\nWorld").is_ok());
        assert!(validate_text("Hello\\nWorld").is_ok());
        assert!(validate_text("").is_ok());
        assert!(validate_text("Hello🙂").is_err());
        assert!(validate_text("tab\there").is_err());
    }

    #[test]
    fn test_validate_text_length() {
        let long = "a".repeat(MAX_TEXT_LENGTH + 1);
        let err = validate_text(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
        assert!(validate_text(&long[1..]).is_ok());
    }

    #[test]
    fn test_interpret_escapes() {
        assert_eq!(interpret_escapes("Hello\\nWorld"), "Hello\nWorld");
        assert_eq!(interpret_escapes("a\\tb\\rc"), "a\tb\rc");
        assert_eq!(interpret_escapes("no escapes"), "no escapes");
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("Hi\n"), "Hi");
        assert_eq!(strip_trailing_newline("Hi\r\n"), "Hi");
        assert_eq!(strip_trailing_newline("Hi\r"), "Hi");
        assert_eq!(strip_trailing_newline("Hi\n\n"), "Hi\n");
        assert_eq!(strip_trailing_newline("Hi"), "Hi");
        assert_eq!(strip_trailing_newline(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));
    }
}
