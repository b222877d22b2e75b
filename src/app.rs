use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::services::quarterly_fragment::FragmentRenderer;
use crate::services::quarterly_report_em::{EmQuarterlyReportProvider, QuarterlyReportProvider};
use crate::utils::config::ServerConfig;
use crate::utils::http_client::create_em_client;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn QuarterlyReportProvider>,
    pub renderer: Arc<FragmentRenderer>,
}

pub fn build_app(cfg: &ServerConfig) -> anyhow::Result<Router> {
    let client = create_em_client().context("failed to build EM http client")?;
    let provider = Arc::new(EmQuarterlyReportProvider::new(client, cfg.em_report_url.clone()));
    let renderer = Arc::new(FragmentRenderer::new().context("failed to compile templates")?);
    Ok(build_app_with_state(AppState { provider, renderer }))
}

pub fn build_app_with_state(state: AppState) -> Router {
    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
