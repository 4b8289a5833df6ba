//! huffcode-core: static Huffman coding with deterministic codebooks
//!
//! This library provides the algorithmic core of a simple communication link:
//! - Measures or accepts symbol statistics
//! - Builds an optimal prefix tree with a fixed tie-break rule
//! - Derives a bijective symbol ↔ code table
//! - Encodes symbol sequences into a bit-string and decodes them back
//!
//! # Architecture
//!
//! Data flows one way through the modules:
//! - `frequency`: symbol counts and their leaf order
//! - `tree`: arena-backed Huffman tree and code assignment
//! - `codebook`: immutable symbol ↔ code mapping
//! - `encoder` / `decoder`: pure transforms plus stateful link endpoints
//! - `codeword`: the bit-string passed between them
//! - `text`: Unicode/UTF-8 helpers for callers working with strings
//! - `metrics`: coding statistics for reporting
//!
//! # Design Principles
//!
//! - **Deterministic**: identical statistics give identical codebooks, so a
//!   sender and receiver only need to share counts
//! - **Immutable codebooks**: changing statistics means building a new one
//! - **No panics**: all failures are structured [`Error`] values
//! - **No side effects**: nothing here logs or performs I/O
//!
//! # Example
//! ```
//! use huffcode_core::{decode, encode, Codebook, FrequencyTable};
//!
//! let message: Vec<char> = "abracadabra".chars().collect();
//! let table = FrequencyTable::from_sequence(message.iter().cloned()).unwrap();
//! let codebook = Codebook::from_table(&table).unwrap();
//!
//! let codeword = encode(&message, &codebook).unwrap();
//! assert_eq!(codeword.len(), 23);
//!
//! let receiver = Codebook::from_counts(table.counts()).unwrap();
//! assert_eq!(decode(&codeword, &receiver).unwrap(), message);
//! ```

pub mod codebook;
pub mod codeword;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod metrics;
pub mod text;
pub mod tree;

use std::fmt::Debug;

/// Anything that can be coded: ordered for the tie-break, cloneable into
/// tables, printable for error messages.
pub trait Symbol: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Symbol for T {}

// Re-export commonly used types
pub use codebook::Codebook;
pub use codeword::Codeword;
pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use metrics::CodingReport;
pub use tree::HuffmanTree;
