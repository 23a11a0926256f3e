//! AdBuilder — real-estate ad-campaign builder service.
//!
//! Main entry point: loads configuration and serves the wizard API.

use adbuilder_api::ApiServer;
use adbuilder_core::config::AppConfig;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "adbuilder")]
#[command(about = "Real-estate ad-campaign builder service")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "AD_BUILDER__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Bind host (overrides config)
    #[arg(long, env = "AD_BUILDER__API__HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adbuilder=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("AdBuilder starting up");

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(host) = cli.host {
        config.api.host = host;
    }

    info!(
        host = %config.api.host,
        http_port = config.api.http_port,
        "Configuration loaded"
    );

    let server = ApiServer::new(config);

    info!("AdBuilder is ready to serve traffic");

    server.start_http().await?;

    Ok(())
}
