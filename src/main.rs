//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_text` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the extracted text, or the error chain
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process;

use page_text::initialization::{init_crypto_provider, init_logger_with};
use page_text::{load, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match load(&config).await {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            debug!("Load of {} failed ({})", config.url, e.as_str());
            let e = anyhow::Error::new(e).context(format!("Failed to load {}", config.url));
            eprintln!("page_text error: {:#}", e);
            process::exit(1);
        }
    }
}
