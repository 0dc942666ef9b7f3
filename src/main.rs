use anyhow::{Context, Result};
use clap::Parser;
use saas_gateway::config::{self, Config};
use saas_gateway::server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Token-protected gateway for joke and weather APIs.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Env-style file with secrets and settings (default: `.env` if present)
    #[arg(long, env = "ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = match &cli.env_file {
        Some(path) => Some(
            dotenvy::from_path(path)
                .map(|_| path.clone())
                .with_context(|| format!("Failed to load env file {}", path.display()))?,
        ),
        None => dotenvy::dotenv().ok(),
    };

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    init_tracing(&config);

    match env_file {
        Some(path) => tracing::info!("Loaded settings from {}", path.display()),
        None => tracing::info!("No env file found, using process environment"),
    }
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
