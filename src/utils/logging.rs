use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt, fmt};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use chrono::Utc;
use chrono_tz::Asia::Shanghai;

const DEFAULT_FILTER: &str = "info,quarterly_report=info,tower_http=info";
const LOG_FILE_NAME: &str = "quarterly-report.log";

/// 日志时间统一使用上海时区，与 A 股交易时间对齐
struct ShanghaiTime;

impl FormatTime for ShanghaiTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&Shanghai);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub struct LogConfig {
    /// 为 None 时只输出到控制台
    pub file_dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        let log_to_file = std::env::var("LOG_TO_FILE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        let file_dir = log_to_file
            .then(|| std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()));
        Self { file_dir }
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim(), "true" | "1")
}

pub fn init_logging(cfg: &LogConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_timer(ShanghaiTime)
        .with_target(true)
        .with_line_number(true);

    // 文件层按天轮转，关闭 ANSI 颜色
    let file_layer = cfg.file_dir.as_ref().map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
        fmt::layer()
            .with_timer(ShanghaiTime)
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}
