pub mod quarterly_report;

pub use quarterly_report::{FetchDataQuery, FetchDataResponse, QuarterlyReport};
