//! Stock Trend Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server, wiring configuration, routes, and middleware.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stock_trend_analyzer::api::{create_router, AppState};
use stock_trend_analyzer::config::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stock_trend_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    // Provider credentials are validated here; the listener only binds once
    // configuration is complete.
    let config = AppConfig::from_env().context("loading configuration")?;

    let state = AppState::from_config(&config);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router).await.context("serving")?;
    Ok(())
}
