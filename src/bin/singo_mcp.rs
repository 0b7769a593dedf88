use std::path::PathBuf;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

use singo_dashboard::mcp::ReportService;

/// 신GO! MCP server: read-only access to reports via Model Context Protocol.
#[derive(Parser, Debug)]
#[command(name = "singo-mcp", version, about)]
struct Cli {
    /// Seed file with reports (JSON or YAML). Built-in data when omitted.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr (MCP uses stdio for JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("singo_dashboard=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    tracing::info!(
        data = ?cli.data.as_deref().map(|p| p.display().to_string()),
        "Starting report MCP server"
    );

    let service = ReportService::open(cli.data.as_deref())?;

    let server = service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    server.waiting().await?;

    Ok(())
}
