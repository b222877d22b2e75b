use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::quarterly_report::fetch_data;

pub fn router() -> Router<AppState> {
    Router::new().route("/fetch_data", get(fetch_data))
}
