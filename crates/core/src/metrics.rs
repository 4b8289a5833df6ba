//! Coding statistics for one message passed through a codebook.
//!
//! This module reports how well the code fits the message:
//! - Size (codeword bits vs. fixed-length and UTF-8 bits)
//! - Average code length against the entropy bound
//! - Whether the receiver got the message back
//!
//! # Design
//!
//! The report is plain data filled in by the caller at each stage. Nothing
//! here logs or measures on its own except the wall-clock duration.

use std::time::{Duration, Instant};

use crate::codebook::Codebook;
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Summary of one encode/decode run.
#[derive(Debug, Clone)]
pub struct CodingReport {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Message ===
    /// Symbols in the transmitted message
    pub message_symbols: u64,

    /// UTF-8 size of the transmitted message in bytes
    pub message_bytes: u64,

    /// Distinct symbols in the alphabet
    pub alphabet_size: u64,

    // === Code ===
    /// Bits in the produced codeword
    pub codeword_bits: u128,

    /// Longest code in the codebook
    pub max_code_len: u64,

    /// Shannon entropy of the statistics, bits per symbol
    pub entropy: f64,

    // === Receiver ===
    /// Symbols recovered by the decoder
    pub decoded_symbols: u64,

    /// Whether the recovered message equals the original
    pub recovered: bool,
}

impl CodingReport {
    /// Create an empty report with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            message_symbols: 0,
            message_bytes: 0,
            alphabet_size: 0,
            codeword_bits: 0,
            max_code_len: 0,
            entropy: 0.0,
            decoded_symbols: 0,
            recovered: false,
        }
    }

    /// Fill in the code-related fields from the transmitter's statistics.
    pub fn record_code<S: Symbol>(&mut self, table: &FrequencyTable<S>, codebook: &Codebook<S>) {
        self.message_symbols = table.total();
        self.alphabet_size = table.len() as u64;
        self.codeword_bits = codebook.weighted_path_length(table);
        self.max_code_len = codebook.max_code_len() as u64;
        self.entropy = table.entropy();
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Bits a fixed-length code over the same alphabet would need.
    ///
    /// At least one bit per symbol, even for a one-symbol alphabet.
    pub fn fixed_length_bits(&self) -> u128 {
        let width = match self.alphabet_size {
            0 | 1 => 1,
            n => 64 - (n - 1).leading_zeros(),
        };
        u128::from(width) * u128::from(self.message_symbols)
    }

    /// Average code length in bits per symbol.
    pub fn average_code_length(&self) -> f64 {
        if self.message_symbols == 0 {
            0.0
        } else {
            self.codeword_bits as f64 / self.message_symbols as f64
        }
    }

    /// Entropy / average code length, 1.0 meaning the bound is met.
    ///
    /// Returns 1.0 when the average is zero (single-symbol alphabet).
    pub fn efficiency(&self) -> f64 {
        let average = self.average_code_length();
        if average == 0.0 {
            1.0
        } else {
            self.entropy / average
        }
    }

    /// Codeword bits relative to the UTF-8 size of the message.
    ///
    /// Returns 0.0 if the message is empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.message_bytes == 0 {
            0.0
        } else {
            self.codeword_bits as f64 / (self.message_bytes * 8) as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Coding Summary ===");
        println!("Duration: {} µs", self.duration().as_micros());
        println!();

        println!("=== Message ===");
        println!("Symbols: {}", self.message_symbols);
        println!("UTF-8: {} bytes ({} bits)", self.message_bytes, self.message_bytes * 8);
        println!("Alphabet: {} symbols", self.alphabet_size);
        println!();

        println!("=== Code ===");
        println!("Codeword: {} bits", self.codeword_bits);
        println!("Fixed-length: {} bits", self.fixed_length_bits());
        println!("Longest code: {} bits", self.max_code_len);
        println!("Average: {:.4} bits/symbol", self.average_code_length());
        println!("Entropy: {:.4} bits/symbol", self.entropy);
        println!("Efficiency: {:.1}%", self.efficiency() * 100.0);
        println!("Ratio vs UTF-8: {:.1}%", self.compression_ratio() * 100.0);
        println!();

        println!("=== Receiver ===");
        println!("Decoded symbols: {}", self.decoded_symbols);
        if self.recovered {
            println!("Verification: PASSED ✓");
        } else {
            println!("Verification: FAILED ✗");
        }
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.recovered {
            println!("✓ Message correctly recovered");
            println!(
                "  {} symbols in {} bits ({:.3} bits/symbol)",
                self.message_symbols,
                self.codeword_bits,
                self.average_code_length()
            );
        } else {
            println!(
                "✗ Decoded message does not match ({} of {} symbols recovered)",
                self.decoded_symbols, self.message_symbols
            );
        }
    }

    /// Export the report as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_us={}\n\
             message_symbols={}\n\
             message_bytes={}\n\
             alphabet_size={}\n\
             codeword_bits={}\n\
             fixed_length_bits={}\n\
             average_code_length={:.4}\n\
             entropy={:.4}\n\
             efficiency={:.4}\n\
             decoded_symbols={}\n\
             recovered={}\n",
            self.duration().as_micros(),
            self.message_symbols,
            self.message_bytes,
            self.alphabet_size,
            self.codeword_bits,
            self.fixed_length_bits(),
            self.average_code_length(),
            self.entropy,
            self.efficiency(),
            self.decoded_symbols,
            self.recovered,
        )
    }
}

impl Default for CodingReport {
    fn default() -> Self {
        Self::new()
    }
}
