//! huffcode: Huffman link demo.
//!
//! Sends a message through a transmitter endpoint, hands only the symbol
//! counts to a receiver endpoint, decodes, and checks the message came back.
//!
//! Exit codes: 0 recovered, 1 mismatch, 2 coding error.

#![forbid(unsafe_code)]

mod config;
mod input_gen;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Args, Config, MessageSource};
use huffcode_core::{text, CodingReport, Decoder, Encoder, Error};

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    if config.print_config {
        config.print();
    }

    info!("running application");

    let message = match &config.source {
        MessageSource::Literal(message) => message.clone(),
        MessageSource::Random { seed, len } => {
            info!(seed, len, "generating random message");
            input_gen::generate_message(*seed, *len)
        }
    };

    let status = match run(&config, &message) {
        Ok(true) => {
            info!("SUCCESS! message correctly recovered");
            0
        }
        Ok(false) => 1,
        Err(err) if err.is_internal() => {
            error!(error = %err, "internal invariant violated, aborting");
            2
        }
        Err(err) => {
            error!(error = %err, "coding failed");
            2
        }
    };

    info!("closing application");
    ExitCode::from(status)
}

/// Run one message over the link; `Ok(false)` means it arrived altered.
fn run(config: &Config, message: &str) -> Result<bool, Error> {
    let mut report = CodingReport::new();
    // the link carries text as UTF-8; the coder sees its scalar values
    let tx_bytes = text::to_utf8_bytes(message);
    report.message_bytes = tx_bytes.len() as u64;
    let symbols = text::symbols(&text::from_utf8_bytes(&tx_bytes)?);

    // === Transmitter ===
    debug!(target: "encoder", "initializing encoder");
    let mut encoder = Encoder::new();
    let codeword = encoder.encode(&symbols)?;
    debug!(target: "encoder", tx_message = %message);
    debug!(target: "encoder", %codeword);

    let (Some(table), Some(codebook)) = (encoder.table(), encoder.codebook()) else {
        return Err(Error::EmptyInput);
    };
    report.record_code(table, codebook);

    if codebook.len() == 1 {
        warn!(
            target: "encoder",
            "single-symbol alphabet: its code is empty, the codeword carries no bits"
        );
    }

    if config.print_codebook {
        println!("=== Codebook ===");
        println!("{}", codebook);
        println!();
    }

    // === Receiver ===
    // only the counts cross the link
    let stats = table.counts();
    debug!(target: "decoder", "initializing decoder");
    let mut decoder = Decoder::new();
    let decoded = decoder.decode(&codeword, stats)?;
    let rx_bytes = text::to_utf8_bytes(&text::to_string(&decoded));
    let decoded = text::from_utf8_bytes(&rx_bytes)?;
    debug!(target: "decoder", %codeword);
    debug!(target: "decoder", rx_message = %decoded);

    report.decoded_symbols = decoded.chars().count() as u64;
    report.recovered = decoded == message;
    report.complete();

    if !report.recovered {
        error!("FAILURE! decoded message does not match the original");
        error!(original = %message);
        error!(decoded = %decoded);
    }

    if config.print_metrics {
        report.print_summary();
    }
    report.print_result();

    Ok(report.recovered)
}
