//! curio server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol
//! on stdout.

use anyhow::Result;
use curio_core::{AppConfig, CacheDb};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        db_path = %config.db_path.display(),
        mock = config.mock_search,
        ttl_hours = config.cache_ttl_hours,
        "starting curio server on stdio transport"
    );

    let db = CacheDb::open(&config.db_path).await?;

    let handler = handler::CurioServer::new(db.clone(), config);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    db.close().await?;

    Ok(())
}
