mod app;
mod app_state;
mod config;
mod error;
mod process_info;
mod routes;

use std::{sync::Arc, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_state::AppState;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();

    // Load .env file if present (ignored silently if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fullstack_backend=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let listener = app::bind(&config).await?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    tracing::info!("Application running on port {}", local_addr.port());
    tracing::info!("Health endpoint: http://{local_addr}/health");

    let state = Arc::new(AppState::new(config, started_at));

    app::serve(listener, state, app::shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
