use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::quarterly_report_em::QuarterlyReportError;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    /// 拉取或转换财务数据失败，原样返回错误描述
    Fetch(String),
}

impl From<QuarterlyReportError> for AppError {
    fn from(err: QuarterlyReportError) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
            AppError::Fetch(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": msg})),
            )
                .into_response(),
        }
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
