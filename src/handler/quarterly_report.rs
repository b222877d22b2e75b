use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::api_models::{FetchDataQuery, FetchDataResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::quarterly_fragment::RenderedFragment;

/// 查询单季度财务指标，返回表格与营收增长率折线图的 HTML 片段
pub async fn fetch_data(
    State(state): State<AppState>,
    query: Result<Query<FetchDataQuery>, QueryRejection>,
) -> Result<Json<FetchDataResponse>, AppError> {
    // 查询串解析失败同样按 JSON 错误返回，前端只认 {"error": ...}
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("查询参数无效: {}", rejection.body_text());
        AppError::Fetch(rejection.body_text())
    })?;
    let code = query.code_or_default();

    let reports = state
        .provider
        .fetch_quarterly_reports(code)
        .await
        .map_err(|e| {
            tracing::error!("获取单季度财务数据失败: code={}, error={}", code, e);
            AppError::from(e)
        })?;

    let fragment = RenderedFragment::from_reports(&reports);
    let html = state.renderer.render(&fragment).map_err(|e| {
        tracing::error!("渲染财务数据失败: code={}, error={}", code, e);
        AppError::from(e)
    })?;

    tracing::info!("单季度财务数据: code={}, rows={}", code, fragment.rows.len());
    Ok(Json(FetchDataResponse { html }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use serde_json::Value;

    use super::*;
    use crate::api_models::QuarterlyReport;
    use crate::services::fake_provider::FakeProvider;
    use crate::services::quarterly_fragment::FragmentRenderer;

    fn state_with(provider: Arc<FakeProvider>) -> AppState {
        AppState {
            provider,
            renderer: Arc::new(FragmentRenderer::new().unwrap()),
        }
    }

    fn five_reports() -> Vec<QuarterlyReport> {
        let dates = [(2024, 12, 31), (2024, 9, 30), (2024, 6, 30), (2024, 3, 31), (2023, 12, 31)];
        dates
            .iter()
            .enumerate()
            .map(|(i, &(y, m, d))| QuarterlyReport {
                report_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                gross_margin: if i == 2 { None } else { Some(60.0 - i as f64) },
                revenue_yoy: Some(10.0 + i as f64),
                deducted_net_profit_yoy: Some(-5.25),
            })
            .collect()
    }

    async fn call(state: AppState, code: Option<&str>) -> (StatusCode, Value) {
        let query = FetchDataQuery { code: code.map(str::to_string) };
        let resp = fetch_data(State(state), Ok(Query(query))).await.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn renders_five_rows_with_placeholder() {
        let provider = Arc::new(FakeProvider::with_reports(five_reports()));
        let (status, body) = call(state_with(provider.clone()), Some("300181")).await;

        assert_eq!(status, StatusCode::OK);
        let html = body["html"].as_str().unwrap();
        assert_eq!(html.matches("<tr>").count(), 5);
        assert_eq!(html.matches(r#"<td class="p-2 border">—</td>"#).count(), 1);
        assert!(!html.contains("nan"));
        assert!(html.contains(
            r#"labels: ["2024-12-31","2024-09-30","2024-06-30","2024-03-31","2023-12-31"]"#
        ));
        assert_eq!(provider.requested_codes(), vec!["300181"]);
    }

    #[tokio::test]
    async fn defaults_to_sample_ticker() {
        let provider = Arc::new(FakeProvider::with_reports(Vec::new()));
        let (status, _) = call(state_with(provider.clone()), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, _) = call(state_with(provider.clone()), Some("   ")).await;
        assert_eq!(provider.requested_codes(), vec!["300181", "300181"]);
    }

    #[tokio::test]
    async fn provider_failure_returns_500_with_message() {
        let provider = Arc::new(FakeProvider::failing("connection reset"));
        let (status, body) = call(state_with(provider), Some("600519")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("connection reset"));
        assert!(body.get("html").is_none());
    }
}
