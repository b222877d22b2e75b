use axum::Router;

use crate::app::AppState;
use crate::handler::error::not_found;

mod quarterly_report;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 查询页与健康检查
        .merge(root::router())
        .merge(quarterly_report::router())
        .fallback(not_found)
}
