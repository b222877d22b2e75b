use serde::Serialize;
use tera::{Context, Tera};

use crate::api_models::QuarterlyReport;
use crate::services::quarterly_report_em::MAX_REPORTS;
use crate::utils::percent::{format_percent, parse_percent_scalar};

const FRAGMENT_TEMPLATE: &str = "quarterly_fragment.html";

/// 表格列定义，表头样式跟随列走而不是按表头文字替换
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Column {
    pub label: &'static str,
    pub header_class: &'static str,
}

pub const COLUMNS: [Column; 4] = [
    Column { label: "时间", header_class: "" },
    Column { label: "毛利率", header_class: "" },
    Column { label: "营收", header_class: "bg-orange-100 p-2 border" },
    Column { label: "扣非", header_class: "bg-gray-100 p-2 border" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    pub period: String,
    pub gross_margin: String,
    pub revenue_yoy: String,
    pub deducted_net_profit_yoy: String,
}

impl RenderedRow {
    /// 与 `COLUMNS` 顺序一致
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.period,
            &self.gross_margin,
            &self.revenue_yoy,
            &self.deducted_net_profit_yoy,
        ]
    }
}

impl From<&QuarterlyReport> for RenderedRow {
    fn from(r: &QuarterlyReport) -> Self {
        Self {
            period: r.report_date.format("%Y-%m-%d").to_string(),
            gross_margin: format_percent(r.gross_margin),
            revenue_yoy: format_percent(r.revenue_yoy),
            deducted_net_profit_yoy: format_percent(r.deducted_net_profit_yoy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    /// 营收同比，缺失值为 null，图表上断开
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFragment {
    pub rows: Vec<RenderedRow>,
    pub chart: ChartSeries,
}

impl RenderedFragment {
    /// 只取前 `MAX_REPORTS` 行，不重新排序
    pub fn from_reports(reports: &[QuarterlyReport]) -> Self {
        let rows: Vec<RenderedRow> = reports
            .iter()
            .take(MAX_REPORTS)
            .map(RenderedRow::from)
            .collect();
        // 图表数据取自已格式化的表格单元格，与表格展示保持一致
        let chart = ChartSeries {
            labels: rows.iter().map(|r| r.period.clone()).collect(),
            values: rows.iter().map(|r| parse_percent_scalar(&r.revenue_yoy)).collect(),
        };
        Self { rows, chart }
    }
}

#[derive(Serialize)]
struct FragmentView<'a> {
    columns: &'a [Column],
    rows: Vec<[&'a str; 4]>,
    chart: &'a ChartSeries,
}

pub struct FragmentRenderer {
    tera: Tera,
}

impl FragmentRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            FRAGMENT_TEMPLATE,
            include_str!("../../templates/quarterly_fragment.html"),
        )?;
        Ok(Self { tera })
    }

    pub fn render(&self, fragment: &RenderedFragment) -> Result<String, tera::Error> {
        let view = FragmentView {
            columns: &COLUMNS,
            rows: fragment.rows.iter().map(RenderedRow::cells).collect(),
            chart: &fragment.chart,
        };
        let context = Context::from_serialize(&view)?;
        self.tera.render(FRAGMENT_TEMPLATE, &context)
    }
}
