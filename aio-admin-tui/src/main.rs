//! AIO Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台请求 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，guard 持有到退出
//!     Runtime::new()          // tokio 运行时，后台请求在其中执行
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 主循环（切换语言时在内部重建会话）
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环本身是同步的：它在主线程上轮询按键并渲染，
//! 网络请求被 spawn 到运行时的工作线程，结果通过 channel 送回。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    let _guard = init_logging()?;
    log::info!("Starting AIO admin console v{}", env!("CARGO_PKG_VERSION"));

    // 2. 异步运行时
    let runtime = tokio::runtime::Runtime::new()?;

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 运行主循环
    let result = app::run(&mut terminal, runtime.handle());

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Console exited with error: {e:#}");
    }
    result
}
