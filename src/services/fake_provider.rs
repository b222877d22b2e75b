use std::sync::Mutex;

use async_trait::async_trait;

use crate::api_models::QuarterlyReport;
use crate::services::quarterly_report_em::{QuarterlyReportError, QuarterlyReportProvider};

/// 测试用数据源，记录每次请求的股票代码
pub struct FakeProvider {
    result: Result<Vec<QuarterlyReport>, String>,
    requested: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn with_reports(reports: Vec<QuarterlyReport>) -> Self {
        Self {
            result: Ok(reports),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuarterlyReportProvider for FakeProvider {
    async fn fetch_quarterly_reports(
        &self,
        stock_code: &str,
    ) -> Result<Vec<QuarterlyReport>, QuarterlyReportError> {
        self.requested.lock().unwrap().push(stock_code.to_string());
        match &self.result {
            Ok(reports) => Ok(reports.clone()),
            Err(message) => Err(QuarterlyReportError::Provider {
                code: 9201,
                message: message.clone(),
            }),
        }
    }
}
