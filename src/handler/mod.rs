pub mod error;
pub mod page;
pub mod quarterly_report;
