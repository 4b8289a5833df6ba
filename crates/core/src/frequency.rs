//! Symbol statistics.
//!
//! A [`FrequencyTable`] is either measured from a message (the transmitter
//! side) or handed over as raw counts (the receiver side). Both ends must
//! derive the same leaf order from it, so the order is fixed here:
//! ascending by count, then ascending by symbol.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::Symbol;

/// Occurrence counts per symbol.
///
/// # Invariants
/// - at least one symbol
/// - `total` is the sum of all counts and is non-zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count each distinct symbol in `symbols`.
    ///
    /// # Errors
    /// `Error::EmptyInput` if the sequence yields nothing.
    pub fn from_sequence<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0u64) += 1;
            total += 1;
        }

        if counts.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self { counts, total })
    }

    /// Accept caller-supplied counts.
    ///
    /// Counts are signed so malformed statistics coming from outside can be
    /// rejected rather than wrapped.
    ///
    /// # Errors
    /// `Error::InvalidStatistics` if the mapping is empty, a count is
    /// negative, a symbol is listed twice, or all counts are zero.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        let mut table = BTreeMap::new();
        let mut total = 0u64;
        for (symbol, count) in counts {
            let count = u64::try_from(count).map_err(|_| {
                Error::invalid_statistics(format!("negative count {} for symbol {:?}", count, symbol))
            })?;
            if table.contains_key(&symbol) {
                return Err(Error::invalid_statistics(format!(
                    "symbol {:?} listed more than once",
                    symbol
                )));
            }
            total = total
                .checked_add(count)
                .ok_or_else(|| Error::invalid_statistics("total count overflows u64"))?;
            table.insert(symbol, count);
        }

        if table.is_empty() {
            return Err(Error::invalid_statistics("no symbols"));
        }
        if total == 0 {
            return Err(Error::invalid_statistics("all counts are zero"));
        }

        Ok(Self {
            counts: table,
            total,
        })
    }

    /// Leaves in tree insertion order, paired with their probabilities.
    pub fn ordered_leaves(&self) -> Vec<(S, f64)> {
        let mut entries: Vec<(&S, u64)> = self.counts.iter().map(|(s, &c)| (s, c)).collect();
        // BTreeMap iteration is already symbol-ascending; a stable sort by
        // count keeps that as the secondary key.
        entries.sort_by_key(|&(_, count)| count);

        let total = self.total as f64;
        entries
            .into_iter()
            .map(|(symbol, count)| (symbol.clone(), count as f64 / total))
            .collect()
    }

    pub fn count(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    pub fn probability(&self, symbol: &S) -> Option<f64> {
        self.count(symbol).map(|c| c as f64 / self.total as f64)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// Export the statistics in the shape `from_counts` accepts.
    pub fn counts(&self) -> Vec<(S, i64)> {
        self.counts
            .iter()
            .map(|(s, &c)| (s.clone(), i64::try_from(c).unwrap_or(i64::MAX)))
            .collect()
    }

    /// Shannon entropy in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total = self.total as f64;
        self.counts
            .values()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}
