use axum::response::Html;

const INDEX_PAGE: &str = include_str!("../../templates/index.html");

/// 查询页面，静态内容
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
