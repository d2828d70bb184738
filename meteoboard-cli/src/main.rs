//! Binary crate for the `meteoboard` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts for submissions and configuration
//! - Terminal rendering of the view regions

use clap::Parser;
use meteoboard_core::Config;

mod cli;
mod surface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let cmd = cli::Cli::parse();
    cmd.run(config).await
}
