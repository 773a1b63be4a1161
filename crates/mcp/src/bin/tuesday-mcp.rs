// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tuesday_mcp::config::McpConfig;
use tuesday_mcp::server::McpServer;
use tuesday_mcp::tools::Dispatcher;

#[derive(Parser, Debug)]
#[command(name = "tuesday-mcp")]
#[command(about = "MCP server for the Tuesday people and company data API", long_about = None)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the Tuesday API
    #[arg(long, env = "TUESDAY_BASE_URL")]
    base_url: Option<String>,

    /// Fallback API key for calls that do not pass one
    #[arg(long, env = "TUESDAY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "TUESDAY_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = McpConfig::load(args.config.as_deref())?.with_overrides(
        args.base_url,
        args.api_key,
        args.timeout_secs,
    );
    let dispatcher_config = config.dispatcher_config()?;

    if dispatcher_config.fallback_api_key.is_none() {
        tracing::warn!("No TUESDAY_API_KEY configured; every call must pass api_key");
    }
    tracing::info!(base_url = %dispatcher_config.base_url, "Tuesday MCP server starting...");

    let dispatcher = Dispatcher::new(dispatcher_config);
    tracing::info!("Registered {} tools", dispatcher.list_tools().len());

    let server = McpServer::new(dispatcher, config.server_info());
    server.start().await?;

    Ok(())
}
