use anyhow::{Context, Result};
use beacon_server::ServerConfig;
use clap::Parser;
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beacon", version, about = "Host/guest WebRTC signaling relay")]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "BEACON_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    println!("{}", "📡 Starting Beacon signaling relay...".green().bold());
    println!("   🔌 Listen:   {}", cli.server.socket_addr());
    println!("   🧹 Eviction: {:?}", cli.server.eviction);

    info!("Configuration: {:?}", cli.server);

    beacon_server::serve(&cli.server)
        .await
        .context("Signaling relay stopped")?;

    Ok(())
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid log filter `{}`", default_filter))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to install tracing subscriber")
}
