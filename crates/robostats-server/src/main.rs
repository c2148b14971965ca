//! Robostats MCP Server - Statbotics statistics over stdio
//!
//! Exposes three read-only query tools against the Statbotics API.
//! The MCP wire protocol owns stdout, so all logging goes to stderr.

mod server;

use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::RobostatsServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robostats_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run().await {
        error!("Fatal error in server startup: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let server = RobostatsServer::new()?;
    let service = server.serve(stdio()).await?;
    info!("Robostats MCP server running on stdio");
    service.waiting().await?;
    Ok(())
}
