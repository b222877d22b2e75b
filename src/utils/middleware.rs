use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect()
}

/// 查询页与接口同源部署；只有配置了 ALLOWED_ORIGINS 才放开跨域
pub fn cors_layer() -> CorsLayer {
    let allowed_env = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let from_env = parse_origins(&allowed_env);

    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);
    if from_env.is_empty() {
        layer
    } else {
        layer.allow_origin(from_env)
    }
}
