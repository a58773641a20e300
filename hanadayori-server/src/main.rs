//! # Hanadayori Server
//!
//! Serves the card viewer, the share-link API and the image search proxy.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hanadayori_config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use hanadayori_server::{AppState, create_app, shutdown::shutdown_signal};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "hanadayori-server")]
#[command(about = "Flower greeting cards: image search proxy and card viewer")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, env = "HANADAYORI_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config,
        env_file: cli.env_file,
    })
    .load()
    .context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "using configuration file");
    }
    for warning in warnings.iter() {
        warn!(
            message = %warning.message,
            hint = warning.hint.as_deref(),
            "configuration warning"
        );
    }

    let bind_address = config.bind_address();
    let state = AppState::from_config(config);
    info!(
        view_url = %state.view_url,
        max_link_len = state.codec.max_len(),
        dev_mode = state.config().dev_mode,
        "share links configured"
    );
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(bind_address.as_str())
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    let addr = listener.local_addr()?;
    info!("Starting Hanadayori server on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("server stopped");
    Ok(())
}
