/// 缺失数值的占位符
pub const PLACEHOLDER: &str = "—";

/// 保留两位小数并追加 `%`；缺失值输出占位符，不会被当成 0
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// 空串、占位符、`-`/`--` 都表示数据源没有该值
pub fn is_missing_marker(raw: &str) -> bool {
    matches!(raw.trim(), "" | PLACEHOLDER | "-" | "--")
}

/// 解析百分比文本，去掉结尾的 `%`
pub fn parse_percent_scalar<S: AsRef<str>>(s: S) -> Option<f64> {
    let raw = s.as_ref().trim();
    if is_missing_marker(raw) {
        return None;
    }
    let cleaned = raw.trim_end_matches('%').trim();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
