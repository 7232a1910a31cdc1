//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写入文件：
//! `<config_dir>/aio-admin-tui/logs/aio-admin.log.<日期>`，按天滚动。
//! 日志级别由 `RUST_LOG` 控制，默认 info。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志目录
fn log_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("aio-admin-tui")
        .join("logs")
}

/// 初始化文件日志；返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, "aio-admin.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    Ok(guard)
}
