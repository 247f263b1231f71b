//! # Colsort Server
//!
//! Serves the sortable user listing over HTTP.
//!
//! Configuration comes from flags, falling back to environment variables
//! (`SERVER_HOST`, `SERVER_PORT`, `COLSORT_SORT_PARAM`) and a `.env` file.

use anyhow::Context;
use clap::Parser;
use colsort_server::{
    AppState, create_app,
    infra::config::{Config, ServeArgs},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "colsort-server")]
#[command(about = "Listing service with sortable table headers")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before parsing so env fallbacks see it.
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let config = Config::from(cli.serve);
    let addr = config.bind_addr()?;
    info!(
        sort_param = config.sort_params.name(),
        "sortable listing configured"
    );

    let state = AppState::new(config).context("invalid listing column configuration")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "colsort server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("colsort server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
