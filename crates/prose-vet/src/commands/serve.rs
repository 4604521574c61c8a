//! Serve command — run the MCP server on stdio.

use clap::Args;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::{info, instrument};

use prose_vet_core::config::Config;

use crate::server::ProseVetServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; transport is always stdio
}

/// Start the MCP server and block until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let server = ProseVetServer::new(config, max_input);
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start MCP service: {e}"))?;

    service.waiting().await?;
    info!("MCP server stopped");
    Ok(())
}
