//! Configuration for the huffcode link demo.
//!
//! Parses command-line arguments and resolves them into a [`Config`].
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then sends a built-in demo
//! message. A random message can be generated instead; its seed is always
//! resolved and printed so runs are reproducible.

use clap::Parser;

/// Message sent when none is given.
pub const DEFAULT_MESSAGE: &str = "Hello, World! 'utf-8' text-encoded message!";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "huffcode")]
#[command(about = "Huffman link demo: message -> encoder -> codeword -> decoder -> message")]
pub struct Args {
    /// Message to send through the link
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Generate a random message of this many symbols instead of --data
    #[arg(long, conflicts_with = "data")]
    pub random_len: Option<usize>,

    /// Seed for the random message (default: time-based)
    #[arg(long, requires = "random_len")]
    pub seed: Option<u64>,

    /// Print the symbol/code table
    #[arg(long)]
    pub print_codebook: bool,

    /// Print the resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Don't print the coding summary
    #[arg(long)]
    pub no_metrics: bool,

    /// Log filter (tracing env-filter syntax)
    #[arg(long, default_value = "debug")]
    pub log: String,
}

/// Where the message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Literal(String),
    Random { seed: u64, len: usize },
}

/// Complete configuration for a link run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    pub source: MessageSource,

    // === Output ===
    /// Whether to print the codebook table
    pub print_codebook: bool,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the coding summary
    pub print_metrics: bool,

    // === Logging ===
    pub log_filter: String,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// Without `--seed`, a random message uses a time-based seed.
    pub fn from_args(args: Args) -> Self {
        let source = match (args.data, args.random_len) {
            (_, Some(len)) => MessageSource::Random {
                seed: args.seed.unwrap_or_else(time_seed),
                len,
            },
            (Some(data), None) => MessageSource::Literal(data),
            (None, None) => MessageSource::Literal(DEFAULT_MESSAGE.to_string()),
        };

        Config {
            source,
            print_codebook: args.print_codebook,
            print_config: args.print_config,
            print_metrics: !args.no_metrics,
            log_filter: args.log,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.source {
            MessageSource::Literal(message) => {
                println!("Message: {:?} ({} symbols)", message, message.chars().count());
            }
            MessageSource::Random { seed, len } => {
                println!("Message: random, {} symbols", len);
                println!("Seed: {}", seed);
            }
        }
        println!("Print codebook: {}", self.print_codebook);
        println!("Print metrics: {}", self.print_metrics);
        println!("Log filter: {}", self.log_filter);
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("huffcode").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.source, MessageSource::Literal(DEFAULT_MESSAGE.to_string()));
        assert!(config.print_metrics);
        assert!(!config.print_codebook);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_data_argument() {
        let config = parse(&["-d", "abracadabra", "--no-metrics"]);
        assert_eq!(config.source, MessageSource::Literal("abracadabra".to_string()));
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_random_with_seed() {
        let config = parse(&["--random-len", "64", "--seed", "7"]);
        assert_eq!(config.source, MessageSource::Random { seed: 7, len: 64 });
    }

    #[test]
    fn test_seed_requires_random_len() {
        let result = Args::try_parse_from(["huffcode", "--seed", "7"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_conflicts_with_random() {
        let result = Args::try_parse_from(["huffcode", "-d", "x", "--random-len", "5"]);
        assert!(result.is_err());
    }
}
