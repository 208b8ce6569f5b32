//! model-duel CLI
//!
//! Command-line interface for comparing hosted model responses.

use anyhow::Result;
use clap::Parser;
use model_duel::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default level
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Run the selected action
    cli.run().await?;

    Ok(())
}
