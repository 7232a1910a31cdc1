//!
//! app.rs
//! 应用主循环
//!
//!
//! 每次启动（以及每次切换语言之后）都会重新构建一个会话：
//!
//!     1. 从配置目录读取 config.json，读取失败时使用默认配置
//!     2. 环境变量 AIO_ADMIN_API 覆盖配置中的 API 地址
//!     3. 应用主题，按配置的语言构建翻译器
//!     4. 创建 HTTP 客户端与后端服务，后端通过 channel 把结果发回主循环
//!     5. 进入账户页面并开始加载第一页
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit || app.reload_requested {    // 退出或重建会话
//!         break
//!     }
//!     if let Some(event) = poll_event() {             // 等待输入，最长 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg);
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 收取后台任务的结果
//!         update::update(&mut app, msg);
//!     }
//!     update::update(&mut app, AppMessage::Tick);     // 提示过期、搜索防抖
//! }
//!

use std::sync::Arc;
use std::time::Duration;

use aio_admin_core::api::HttpRegistryApi;
use aio_admin_core::i18n::Translator;
use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::backend::{load_or_default, FileConfigService, RegistryService, API_ENV_VAR};
use crate::event;
use crate::message::AppMessage;
use crate::model::{App, Page};
use crate::update;
use crate::util::Term;
use crate::view;
use crate::view::theme::set_theme;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 会话结束的原因
enum SessionEnd {
    Quit,
    Reload,
}

/// 运行应用，切换语言后重建会话
pub fn run(terminal: &mut Term, runtime: &Handle) -> Result<()> {
    loop {
        match run_session(terminal, runtime)? {
            SessionEnd::Quit => return Ok(()),
            SessionEnd::Reload => log::info!("Reloading console after language change"),
        }
    }
}

fn run_session(terminal: &mut Term, runtime: &Handle) -> Result<SessionEnd> {
    let store = Arc::new(FileConfigService::default_location());
    let config = load_or_default(store.as_ref()).with_env_override(std::env::var(API_ENV_VAR).ok());
    set_theme(config.theme);

    let i18n = Translator::builtin(config.language.as_deref())
        .context("failed to load translation bundles")?;
    let api = HttpRegistryApi::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("failed to build registry client")?;
    log::info!(
        "Session started: api={}, locale={}",
        config.api_base_url,
        i18n.locale().code()
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = RegistryService::new(Arc::new(api), runtime.clone(), tx);
    let mut app = App::new(config, store, i18n, backend);
    update::enter_page(&mut app, Page::Accounts);

    loop {
        terminal.draw(|frame| view::render(&app, frame))?;

        if app.should_quit {
            return Ok(SessionEnd::Quit);
        }
        if app.reload_requested {
            return Ok(SessionEnd::Reload);
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, &app);
            update::update(&mut app, msg);
        }

        while let Ok(msg) = rx.try_recv() {
            update::update(&mut app, msg);
        }

        update::update(&mut app, AppMessage::Tick);
    }
}
