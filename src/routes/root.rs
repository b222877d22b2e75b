use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::page::index;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}
