//! Symbol sequence → codeword.

use crate::codebook::Codebook;
use crate::codeword::Codeword;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Concatenate the code of each symbol in input order.
///
/// # Errors
/// `Error::UnknownSymbol` naming the first symbol missing from `codebook`.
pub fn encode<'a, S, I>(symbols: I, codebook: &Codebook<S>) -> Result<Codeword>
where
    S: Symbol + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let symbols = symbols.into_iter();
    let mut codeword = Codeword::with_capacity(symbols.size_hint().0 * codebook.max_code_len().max(1));
    for symbol in symbols {
        let code = codebook
            .code(symbol)
            .ok_or_else(|| Error::unknown_symbol(symbol))?;
        codeword.push_code(code);
    }
    Ok(codeword)
}

/// Transmitter endpoint.
///
/// The first message fixes the statistics: its frequency table and codebook
/// are kept and reused for every later message. Statistics are never
/// updated in place; call [`Encoder::rebuild`] to start over.
#[derive(Debug, Clone)]
pub struct Encoder<S: Symbol> {
    bound: Option<(FrequencyTable<S>, Codebook<S>)>,
}

impl<S: Symbol> Encoder<S> {
    pub fn new() -> Self {
        Self { bound: None }
    }

    /// Encode `message`, measuring statistics from it on first use.
    ///
    /// # Errors
    /// - `Error::EmptyInput` if nothing is bound yet and `message` is empty
    /// - `Error::UnknownSymbol` if a later message leaves the alphabet
    pub fn encode(&mut self, message: &[S]) -> Result<Codeword> {
        if self.bound.is_none() {
            self.bind(message)?;
        }
        match &self.bound {
            Some((_, codebook)) => encode(message, codebook),
            None => Err(Error::EmptyInput),
        }
    }

    /// Replace the bound statistics with those of `message`.
    ///
    /// # Errors
    /// `Error::EmptyInput` if `message` is empty. On error the previous
    /// statistics and codebook stay bound.
    pub fn rebuild(&mut self, message: &[S]) -> Result<&Codebook<S>> {
        let (_, codebook) = self.bind(message)?;
        Ok(codebook)
    }

    /// Statistics to hand to the receiver.
    pub fn table(&self) -> Option<&FrequencyTable<S>> {
        self.bound.as_ref().map(|(table, _)| table)
    }

    pub fn codebook(&self) -> Option<&Codebook<S>> {
        self.bound.as_ref().map(|(_, codebook)| codebook)
    }

    fn bind(&mut self, message: &[S]) -> Result<&(FrequencyTable<S>, Codebook<S>)> {
        let table = FrequencyTable::from_sequence(message.iter().cloned())?;
        let codebook = Codebook::from_table(&table)?;
        let bound = self.bound.insert((table, codebook));
        Ok(&*bound)
    }
}

impl<S: Symbol> Default for Encoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_encode_abracadabra() {
        let message = chars("abracadabra");
        let codebook = Codebook::from_sequence(message.iter().cloned()).unwrap();
        let codeword = encode(&message, &codebook).unwrap();

        assert_eq!(codeword.as_str(), "01101110100010101101110");
        assert_eq!(codeword.len(), 23);
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let codebook = Codebook::from_sequence("abc".chars()).unwrap();
        let err = encode(&chars("abxcy"), &codebook).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownSymbol {
                symbol: "'x'".to_string()
            }
        );
    }

    #[test]
    fn test_encode_empty_sequence() {
        let codebook = Codebook::from_sequence("abc".chars()).unwrap();
        let codeword = encode(&Vec::<char>::new(), &codebook).unwrap();
        assert!(codeword.is_empty());
    }

    #[test]
    fn test_endpoint_binds_first_message() {
        let mut encoder = Encoder::new();
        assert!(encoder.codebook().is_none());

        let first = encoder.encode(&chars("abracadabra")).unwrap();
        assert_eq!(first.len(), 23);
        assert_eq!(encoder.table().unwrap().total(), 11);

        // later messages reuse the bound codebook
        let second = encoder.encode(&chars("cab")).unwrap();
        assert_eq!(second.as_str(), "1000110");
        assert_eq!(encoder.table().unwrap().total(), 11);

        let err = encoder.encode(&chars("zebra")).unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { .. }));
    }

    #[test]
    fn test_endpoint_rebuild() {
        let mut encoder = Encoder::new();
        encoder.encode(&chars("aab")).unwrap();
        let codebook = encoder.rebuild(&chars("xyz")).unwrap();
        assert!(codebook.contains(&'x'));
        assert!(!codebook.contains(&'a'));
    }

    #[test]
    fn test_endpoint_failed_rebuild_keeps_codebook() {
        let mut encoder = Encoder::new();
        encoder.encode(&chars("abracadabra")).unwrap();
        let before = encoder.codebook().cloned();

        assert_eq!(encoder.rebuild(&[]).unwrap_err(), Error::EmptyInput);
        assert_eq!(encoder.codebook().cloned(), before);
        assert_eq!(encoder.table().unwrap().total(), 11);
        assert_eq!(encoder.encode(&chars("cab")).unwrap().as_str(), "1000110");
    }

    #[test]
    fn test_endpoint_empty_first_message() {
        let mut encoder: Encoder<char> = Encoder::new();
        assert_eq!(encoder.encode(&[]).unwrap_err(), Error::EmptyInput);
        assert!(encoder.codebook().is_none());
    }
}
