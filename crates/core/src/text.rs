//! Text ↔ symbol helpers.
//!
//! The coder works on abstract symbols. These helpers cover the usual case
//! where the symbols are the Unicode scalar values of a string, and the
//! UTF-8 transcoding a caller does before and after a link.

use crate::error::{Error, Result};

/// Split text into one symbol per Unicode scalar value.
pub fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Join decoded symbols back into text.
pub fn to_string(symbols: &[char]) -> String {
    symbols.iter().collect()
}

pub fn to_utf8_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Strict UTF-8 decoding.
///
/// # Errors
/// `Error::InvalidUtf8` with the offset of the first bad byte.
pub fn from_utf8_bytes(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_code_points() {
        let syms = symbols("añ€😀");
        assert_eq!(syms, vec!['a', 'ñ', '€', '😀']);
        assert_eq!(to_string(&syms), "añ€😀");
    }

    #[test]
    fn test_utf8_roundtrip() {
        let bytes = to_utf8_bytes("Grüße");
        assert_eq!(bytes.len(), 7);
        assert_eq!(from_utf8_bytes(&bytes).unwrap(), "Grüße");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_utf8_bytes(&[b'o', b'k', 0xFF]).unwrap_err();
        assert_eq!(err, Error::InvalidUtf8 { valid_up_to: 2 });
    }
}
