//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts
//! - Logging setup and top-level error handling

use clap::Parser;
use skycast_core::ProviderError;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cmd = cli::Cli::parse();

    if let Err(e) = cmd.run().await {
        // Shape-class provider errors are the one class nothing below here
        // handles; everything else failed before or during setup.
        if e.downcast_ref::<ProviderError>().is_some() {
            error!("An unexpected error occurred: {e:#}");
        } else {
            error!("{e:#}");
        }
        std::process::exit(1);
    }
}
