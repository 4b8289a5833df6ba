//! Error types for the huffcode core.
//!
//! All operations return structured errors rather than panicking.
//! Symbols are carried in their `Debug` rendering so the error type stays
//! independent of the symbol type a codebook is built over.

use thiserror::Error;

/// Top-level error type for all operations in the core.
///
/// Variants fall into three groups:
/// - Input: empty or malformed statistics, unknown symbols, bad codewords
/// - Invariant: duplicate symbols or codes found while building a codebook
///   (unreachable for correct inputs, signals a construction bug)
/// - Unsupported: the codebook update path, which is not implemented
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbols or statistics to build from
    #[error("empty input: nothing to build a codebook from")]
    EmptyInput,

    /// Externally supplied counts are unusable
    #[error("invalid symbol statistics: {reason}")]
    InvalidStatistics { reason: String },

    /// Encode-time lookup miss
    #[error("symbol {symbol} is not in the codebook alphabet")]
    UnknownSymbol { symbol: String },

    /// Bits left over after the last complete code
    #[error("incomplete codeword: {trailing_bits} trailing bits match no code")]
    IncompleteCodeword { trailing_bits: usize },

    /// Codeword text contains something other than 0s and 1s
    #[error("non-binary character {found:?} in codeword at bit position {position}")]
    NonBinaryCodeword { position: usize, found: char },

    /// Two leaves carry the same symbol
    #[error("internal error: symbol {symbol} assigned to more than one leaf")]
    DuplicateSymbol { symbol: String },

    /// Two leaves carry the same code
    #[error("internal error: code {code:?} assigned to more than one leaf")]
    DuplicateCode { code: String },

    /// Operation exists only as an extension point
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: &'static str },

    /// Decoded symbols do not form valid UTF-8 text
    #[error("invalid UTF-8 at byte offset {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

impl Error {
    /// True for the defensive invariant checks that should never fire.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::DuplicateSymbol { .. } | Error::DuplicateCode { .. })
    }

    pub(crate) fn invalid_statistics(reason: impl Into<String>) -> Self {
        Error::InvalidStatistics {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_symbol<S: std::fmt::Debug>(symbol: &S) -> Self {
        Error::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        }
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
