//! In-memory bit-string produced by the encoder.
//!
//! Bits are kept as ASCII `0`/`1` characters. There is no byte packing: a
//! codeword is meant to be printed, compared and fed back to the decoder.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Concatenated codes with no delimiters.
///
/// # Invariants
/// - contains only `0` and `1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codeword(String);

impl Codeword {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self(String::with_capacity(bits))
    }

    /// Append a code produced by a codebook (already known to be binary).
    pub(crate) fn push_code(&mut self, code: &str) {
        self.0.push_str(code);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Codeword {
    type Err = Error;

    /// Parse text made of `0`s and `1`s.
    ///
    /// # Errors
    /// `Error::NonBinaryCodeword` naming the first offending character.
    fn from_str(s: &str) -> Result<Self> {
        if let Some((position, found)) = s.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
            return Err(Error::NonBinaryCodeword { position, found });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Codeword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary() {
        let cw: Codeword = "0110".parse().unwrap();
        assert_eq!(cw.len(), 4);
        assert_eq!(cw.bits().collect::<Vec<_>>(), vec![false, true, true, false]);
        assert_eq!(cw.to_string(), "0110");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        let err = "01a1".parse::<Codeword>().unwrap_err();
        assert_eq!(
            err,
            Error::NonBinaryCodeword {
                position: 2,
                found: 'a'
            }
        );
    }

    #[test]
    fn test_empty() {
        let cw: Codeword = "".parse().unwrap();
        assert!(cw.is_empty());
        assert_eq!(cw, Codeword::new());
    }
}
