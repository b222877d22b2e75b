use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_EM_REPORT_URL: &str = "https://datacenter.eastmoney.com/securities/api/data/get";

pub struct ServerConfig {
    pub addr: SocketAddr,
    /// 东方财富数据中心接口地址，可指向代理或测试桩
    pub em_report_url: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8001);
        let addr = Self::parse_addr(&host, port)?;
        let em_report_url = std::env::var("EM_REPORT_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_EM_REPORT_URL.to_string());
        Ok(Self { addr, em_report_url })
    }

    fn parse_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", host, port))
    }
}
