mod api_models;
mod app;
mod handler;
mod routes;
mod services;
mod utils;

use anyhow::Context;

use utils::config::ServerConfig;
use utils::logging::{init_logging, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_logging(&LogConfig::from_env());

    let cfg = ServerConfig::from_env()?;
    let app = app::build_app(&cfg)?;

    let listener = tokio::net::TcpListener::bind(cfg.addr)
        .await
        .with_context(|| format!("bind failed: {}", cfg.addr))?;
    tracing::info!(
        "Axum listening on http://{}, provider={}",
        listener.local_addr()?,
        cfg.em_report_url
    );
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
