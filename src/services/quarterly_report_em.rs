use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::api_models::QuarterlyReport;
use crate::utils::percent::{is_missing_marker, parse_percent_scalar};
use crate::utils::secucode::code_to_secucode;

/// 页面最多展示的报告期数量
pub const MAX_REPORTS: usize = 10;

// 东方财富 F10「主要指标 - 按单季度」
const EM_REPORT_TYPE: &str = "RPT_F10_QTR_MAINFINADATA";
const EM_REPORT_STYLE: &str = "APP_F10_QTR_MAINFINADATA";

const COL_REPORT_DATE: &str = "REPORT_DATE";
const COL_GROSS_MARGIN: &str = "XSMLL";
const COL_REVENUE_YOY: &str = "TOTALOPERATEREVETZ";
const COL_DEDUCTED_NET_PROFIT_YOY: &str = "KCFJCXSYJLRTZ";

#[derive(Debug, Error)]
pub enum QuarterlyReportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("provider error {code}: {message}")]
    Provider { code: i64, message: String },
    #[error("missing data field")]
    MissingData,
    #[error("missing column: {0}")]
    MissingColumn(&'static str),
    #[error("invalid value in column {column}: {value}")]
    InvalidValue { column: &'static str, value: String },
    #[error("invalid report date: {0}")]
    InvalidDate(String),
    #[error("invalid stock code: {0}")]
    InvalidCode(String),
}

/// 单季度财务数据来源。返回顺序即展示顺序（最近的报告期在前）
#[async_trait]
pub trait QuarterlyReportProvider: Send + Sync {
    async fn fetch_quarterly_reports(
        &self,
        stock_code: &str,
    ) -> Result<Vec<QuarterlyReport>, QuarterlyReportError>;
}

pub struct EmQuarterlyReportProvider {
    client: Client,
    url: String,
}

impl EmQuarterlyReportProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuarterlyReportProvider for EmQuarterlyReportProvider {
    async fn fetch_quarterly_reports(
        &self,
        stock_code: &str,
    ) -> Result<Vec<QuarterlyReport>, QuarterlyReportError> {
        let secucode = code_to_secucode(stock_code)
            .ok_or_else(|| QuarterlyReportError::InvalidCode(stock_code.to_string()))?;
        let filter = format!("(SECUCODE=\"{}\")", secucode);
        let page_size = MAX_REPORTS.to_string();

        let resp = self
            .client
            .get(&self.url)
            .query(&[
                ("type", EM_REPORT_TYPE),
                ("sty", EM_REPORT_STYLE),
                ("filter", filter.as_str()),
                ("p", "1"),
                ("ps", page_size.as_str()),
                ("sr", "-1"),
                ("st", COL_REPORT_DATE),
                ("source", "HSF10"),
                ("client", "PC"),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(
                "EM 财务指标接口返回非成功状态: status={}, secucode={}",
                status,
                secucode
            );
            return Err(QuarterlyReportError::BadStatus(status.as_u16()));
        }

        let json: Value = serde_json::from_str(&body)?;
        let reports = parse_quarterly_reports(&json)?;
        tracing::debug!("EM 财务指标: secucode={}, rows={}", secucode, reports.len());
        Ok(reports)
    }
}

/// 解析数据中心返回体，保持原有行顺序
pub fn parse_quarterly_reports(json: &Value) -> Result<Vec<QuarterlyReport>, QuarterlyReportError> {
    if json.get("success").and_then(Value::as_bool) == Some(false) {
        let code = json.get("code").and_then(Value::as_i64).unwrap_or_default();
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(QuarterlyReportError::Provider { code, message });
    }

    let rows = json
        .get("result")
        .and_then(|r| r.get("data"))
        .and_then(Value::as_array)
        .ok_or(QuarterlyReportError::MissingData)?;

    rows.iter().map(parse_row).collect()
}

fn parse_row(row: &Value) -> Result<QuarterlyReport, QuarterlyReportError> {
    Ok(QuarterlyReport {
        report_date: parse_report_date(column(row, COL_REPORT_DATE)?)?,
        gross_margin: parse_metric(row, COL_GROSS_MARGIN)?,
        revenue_yoy: parse_metric(row, COL_REVENUE_YOY)?,
        deducted_net_profit_yoy: parse_metric(row, COL_DEDUCTED_NET_PROFIT_YOY)?,
    })
}

fn column<'a>(row: &'a Value, name: &'static str) -> Result<&'a Value, QuarterlyReportError> {
    row.get(name).ok_or(QuarterlyReportError::MissingColumn(name))
}

fn parse_report_date(value: &Value) -> Result<NaiveDate, QuarterlyReportError> {
    let raw = value
        .as_str()
        .ok_or_else(|| QuarterlyReportError::InvalidDate(value.to_string()))?
        .trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| QuarterlyReportError::InvalidDate(raw.to_string()))
}

fn parse_metric(row: &Value, name: &'static str) -> Result<Option<f64>, QuarterlyReportError> {
    let invalid = |value: &Value| QuarterlyReportError::InvalidValue {
        column: name,
        value: value.to_string(),
    };
    let value = column(row, name)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| invalid(value)),
        Value::String(s) if is_missing_marker(s) => Ok(None),
        Value::String(s) => parse_percent_scalar(s).map(Some).ok_or_else(|| invalid(value)),
        other => Err(invalid(other)),
    }
}
