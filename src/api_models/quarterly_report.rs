use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 未传 `code` 时查询的默认股票（佐力药业）
pub const DEFAULT_STOCK_CODE: &str = "300181";

/// 单季度主要财务指标，数值单位为百分点
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyReport {
    pub report_date: NaiveDate,
    pub gross_margin: Option<f64>,
    pub revenue_yoy: Option<f64>,
    pub deducted_net_profit_yoy: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FetchDataQuery {
    pub code: Option<String>,
}

impl FetchDataQuery {
    /// 空白或缺省的 code 回落到默认股票
    pub fn code_or_default(&self) -> &str {
        match self.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code,
            _ => DEFAULT_STOCK_CODE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FetchDataResponse {
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_defaults_when_absent_or_blank() {
        assert_eq!(FetchDataQuery::default().code_or_default(), "300181");
        let blank = FetchDataQuery { code: Some("  ".to_string()) };
        assert_eq!(blank.code_or_default(), "300181");
        let given = FetchDataQuery { code: Some(" 600519 ".to_string()) };
        assert_eq!(given.code_or_default(), "600519");
    }
}
