//! FRED MCP Server
//!
//! Model Context Protocol server exposing the Federal Reserve Economic Data
//! (FRED) API to LLM agents and developer IDEs over stdio.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use fred_client::{FredSettings, API_KEY_ENV, API_KEY_HELP_URL, BASE_URL_ENV};
use fred_mcp::FredMcpServer;

#[derive(Debug, Parser)]
#[command(name = "fred-mcp", version, about = "MCP server for FRED economic data")]
struct Cli {
    /// Override the FRED API base URL
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fred_mcp=info".parse()?)
                .add_directive("fred_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("fred-mcp starting (stdio transport)");

    let mut settings = FredSettings::from_env();
    if let Some(base_url) = cli.base_url {
        settings = settings.with_base_url(base_url);
    }
    if !settings.has_api_key() {
        tracing::warn!(
            "{API_KEY_ENV} is not set; tools will fail until it is. Get a key from: {API_KEY_HELP_URL}"
        );
    }

    let server = FredMcpServer::new(settings);
    let handle = server.clone();
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    let reason = service.waiting().await?;
    tracing::info!(?reason, "fred-mcp stopped");

    handle.shutdown();
    Ok(())
}
