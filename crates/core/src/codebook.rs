//! Symbol ↔ code mapping derived from one Huffman tree.
//!
//! A codebook is built once and never changes. Sender and receiver each
//! build their own from the same statistics; determinism of the tree makes
//! the two identical, so only the counts ever need to be shared.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::Symbol;

/// Bijective mapping between symbols and their prefix-free codes.
///
/// # Invariants
/// - `mapping` and `demapping` are exact inverses
/// - no code is a proper prefix of another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook<S: Symbol> {
    mapping: BTreeMap<S, String>,
    demapping: BTreeMap<String, S>,
}

impl<S: Symbol> Codebook<S> {
    /// Collect the codes of every leaf in `tree`.
    ///
    /// # Errors
    /// - `Error::DuplicateSymbol` if two leaves carry the same symbol
    /// - `Error::DuplicateCode` if two leaves end up with the same code
    ///
    /// Both indicate a construction bug rather than bad input.
    pub fn build(tree: &HuffmanTree<S>) -> Result<Self> {
        let mut mapping = BTreeMap::new();
        let mut demapping = BTreeMap::new();

        for (symbol, code) in tree.codes() {
            if mapping.contains_key(&symbol) {
                return Err(Error::DuplicateSymbol {
                    symbol: format!("{:?}", symbol),
                });
            }
            if demapping.contains_key(&code) {
                return Err(Error::DuplicateCode { code });
            }
            mapping.insert(symbol.clone(), code.clone());
            demapping.insert(code, symbol);
        }

        Ok(Self { mapping, demapping })
    }

    /// Build the tree for `table` and derive its codebook.
    pub fn from_table(table: &FrequencyTable<S>) -> Result<Self> {
        let tree = HuffmanTree::build(table.ordered_leaves())?;
        Self::build(&tree)
    }

    /// Transmitter side: measure the statistics from the message itself.
    pub fn from_sequence<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_table(&FrequencyTable::from_sequence(symbols)?)
    }

    /// Receiver side: statistics are supplied.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        Self::from_table(&FrequencyTable::from_counts(counts)?)
    }

    /// Not implemented; build a fresh codebook from the new statistics.
    ///
    /// # Errors
    /// Always `Error::UnsupportedOperation`.
    pub fn update(&self, _table: &FrequencyTable<S>) -> Result<Self> {
        Err(Error::UnsupportedOperation {
            operation: "codebook update",
        })
    }

    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.mapping.get(symbol).map(String::as_str)
    }

    pub fn symbol(&self, code: &str) -> Option<&S> {
        self.demapping.get(code)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.mapping.contains_key(symbol)
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.mapping.iter().map(|(s, c)| (s, c.as_str()))
    }

    pub fn max_code_len(&self) -> usize {
        self.demapping.keys().map(String::len).max().unwrap_or(0)
    }

    /// Σ count × code length: the exact codeword size for the message the
    /// table was measured from.
    ///
    /// Summed in `u128`: the total count fits in `u64` and so does every code
    /// length, so the sum cannot overflow.
    pub fn weighted_path_length(&self, table: &FrequencyTable<S>) -> u128 {
        table
            .iter()
            .filter_map(|(symbol, count)| {
                self.code(symbol)
                    .map(|c| u128::from(count) * c.len() as u128)
            })
            .sum()
    }

    /// Expected bits per symbol, Σ probability × code length.
    pub fn average_code_length(&self, table: &FrequencyTable<S>) -> f64 {
        self.weighted_path_length(table) as f64 / table.total() as f64
    }
}

impl<S: Symbol> fmt::Display for Codebook<S> {
    /// One `symbol TAB code` pair per line, in symbol order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, code)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}\t{}", symbol, code)?;
        }
        Ok(())
    }
}
