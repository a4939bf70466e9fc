//! Sluice MCP server binary.
//!
//! This binary runs the MCP server using stdio transport.

use sluice_mcp::SluiceMcpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the protocol, so log to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting sluice-mcp server");

    // Create and run the server
    let server = SluiceMcpServer::new();
    server.run().await?;

    Ok(())
}
