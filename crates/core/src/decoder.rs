//! Codeword → symbol sequence.
//!
//! Decoding reads one bit at a time into a buffer and looks the buffer up
//! after every bit. Because the code is prefix-free, the first match is the
//! only possible one and the decoder never backtracks.

use crate::codebook::Codebook;
use crate::codeword::Codeword;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Recover the symbols of `codeword`.
///
/// # Errors
/// `Error::IncompleteCodeword` if bits remain after the last complete code.
pub fn decode<S: Symbol>(codeword: &Codeword, codebook: &Codebook<S>) -> Result<Vec<S>> {
    let mut decoded = Vec::new();
    let mut buffer = String::with_capacity(codebook.max_code_len());

    for bit in codeword.as_str().chars() {
        buffer.push(bit);
        if let Some(symbol) = codebook.symbol(&buffer) {
            decoded.push(symbol.clone());
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        return Err(Error::IncompleteCodeword {
            trailing_bits: buffer.len(),
        });
    }

    Ok(decoded)
}

/// Receiver endpoint.
///
/// Builds its codebook from the statistics it is told about, once. Later
/// calls must carry the same statistics; different ones would require
/// updating the codebook, which is not supported. Use
/// [`Decoder::rebuild`] to switch statistics explicitly.
#[derive(Debug, Clone)]
pub struct Decoder<S: Symbol> {
    bound: Option<(FrequencyTable<S>, Codebook<S>)>,
}

impl<S: Symbol> Decoder<S> {
    pub fn new() -> Self {
        Self { bound: None }
    }

    /// Decode `codeword` against the codebook for `stats`.
    ///
    /// # Errors
    /// - `Error::UnsupportedOperation` if `stats` differ from the bound ones
    /// - `Error::IncompleteCodeword` for trailing unmatched bits
    /// - statistics errors from `FrequencyTable::from_counts`
    pub fn decode<I>(&mut self, codeword: &Codeword, stats: I) -> Result<Vec<S>>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        let table = FrequencyTable::from_counts(stats)?;
        let same_stats = self.bound.as_ref().map(|(bound, _)| *bound == table);
        match same_stats {
            Some(false) => {
                return Err(Error::UnsupportedOperation {
                    operation: "codebook update",
                })
            }
            Some(true) => {}
            None => {
                let codebook = Codebook::from_table(&table)?;
                self.bound = Some((table, codebook));
            }
        }

        match &self.bound {
            Some((_, codebook)) => decode(codeword, codebook),
            None => Err(Error::EmptyInput),
        }
    }

    /// Replace the bound statistics with `stats`.
    ///
    /// # Errors
    /// Statistics errors from `FrequencyTable::from_counts`. On error the
    /// previous statistics and codebook stay bound.
    pub fn rebuild<I>(&mut self, stats: I) -> Result<&Codebook<S>>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        let table = FrequencyTable::from_counts(stats)?;
        let codebook = Codebook::from_table(&table)?;
        let (_, codebook) = self.bound.insert((table, codebook));
        Ok(&*codebook)
    }

    pub fn table(&self) -> Option<&FrequencyTable<S>> {
        self.bound.as_ref().map(|(table, _)| table)
    }

    pub fn codebook(&self) -> Option<&Codebook<S>> {
        self.bound.as_ref().map(|(_, codebook)| codebook)
    }
}

impl<S: Symbol> Default for Decoder<S> {
    fn default() -> Self {
        Self::new()
    }
}
