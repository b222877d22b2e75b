pub mod quarterly_fragment;
pub mod quarterly_report_em;

#[cfg(test)]
pub mod fake_provider;
