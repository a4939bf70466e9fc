//! Sluice CLI binary.

use anyhow::Result;
use sluice::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the sluice CLI.
///
/// The analysis is pure synchronous computation with no I/O beyond
/// reading the pipeline document, so no async runtime is involved.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=sluice=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sluice=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting sluice CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Sluice CLI completed successfully");
    Ok(())
}
