//! Message generation for demo runs.
//!
//! When `--random-len` is given, we generate a message with a skewed symbol
//! distribution so the code lengths visibly differ: a few very common
//! symbols, a tail of rare ones.
//!
//! # Design
//!
//! Generated text mixes:
//! - common symbols (space and frequent letters)
//! - ordinary lowercase letters and punctuation
//! - rare non-ASCII symbols, to exercise multi-byte UTF-8

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const COMMON: &[char] = &[' ', 'e', 't', 'a', 'o'];
const ORDINARY: &str = "bcdfghijklmnpqrsuvwxyz.,!?'-";
const RARE: &[char] = &['ä', 'ö', 'ü', 'ß', 'é', '€', '→', 'λ'];

/// Generate a message of `len` symbols.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: number of symbols (Unicode scalar values)
pub fn generate_message(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ordinary: Vec<char> = ORDINARY.chars().collect();

    (0..len)
        .map(|_| match rng.gen_range(0..100) {
            // 50% common
            0..=49 => COMMON[rng.gen_range(0..COMMON.len())],
            // 45% ordinary
            50..=94 => ordinary[rng.gen_range(0..ordinary.len())],
            // 5% rare
            _ => RARE[rng.gen_range(0..RARE.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_message_len() {
        let message = generate_message(42, 1000);
        assert_eq!(message.chars().count(), 1000);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_message(12345, 500), generate_message(12345, 500));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_message(1, 1000), generate_message(2, 1000));
    }

    #[test]
    fn test_various_sizes() {
        for len in [0, 1, 100, 10000] {
            assert_eq!(generate_message(999, len).chars().count(), len);
        }
    }

    #[test]
    fn test_skewed_distribution() {
        let message = generate_message(7, 10_000);
        let spaces = message.chars().filter(|&c| c == ' ').count();
        let rare = message.chars().filter(|c| RARE.contains(c)).count();
        assert!(spaces > rare);
    }
}
