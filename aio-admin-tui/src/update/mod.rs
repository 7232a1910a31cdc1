//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，也是唯一发起后端请求的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod api;                // 后端请求结果处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 导航子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、加载函数
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     本文件中的 load_* 函数是各页面唯一的数据入口：
//!
//!         load_accounts(app, page)
//!             账户列表加载中时直接丢弃（不排队）
//!
//!         load_models(app)
//!             不做并发保护，以最后到达的响应为准
//!
//!         load_debug_models(app)
//!
//!     所有增删改操作完成后都调用它们重新拉取当前页，而不是修改本地数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、定时检查（Tick）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环每轮都会发送一次 AppMessage::Tick：
//!         - 过期的提示被清除（3 秒）
//!         - 搜索框停止输入 1 秒后，若 trim 后的内容有变化则重新加载第一页
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod api;
mod content;
mod modal;
mod navigation;

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::{App, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Api(event) => api::update(app, event),

        AppMessage::Tick => tick(app, Instant::now()),

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => {
            if !app.modal.is_open() {
                refresh_current_page(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

fn tick(app: &mut App, now: Instant) {
    app.expire_toast(now);

    if app.accounts.search.poll(now).is_some() {
        load_accounts(app, 1);
    }
    if app.models.search.poll(now).is_some() {
        app.models.page = 1;
        app.models.selected = 0;
        load_models(app);
    }
}

/// 逐层返回：弹窗 → 下拉框 → 搜索框 → 导航栏
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
    } else if app.debug.dropdown.is_some() {
        app.debug.close_dropdown();
    } else if app.accounts.search.editing || app.models.search.editing {
        app.accounts.search.editing = false;
        app.models.search.editing = false;
    } else if app.focus.is_content() {
        app.focus = app.focus.toggle();
    }
}

/// 进入页面时加载数据
pub(crate) fn enter_page(app: &mut App, page: Page) {
    app.current_page = page;
    refresh_current_page(app);
}

fn refresh_current_page(app: &mut App) {
    match app.current_page {
        Page::Accounts => {
            let page = app.accounts.current_page();
            load_accounts(app, page);
        }
        Page::Models => load_models(app),
        Page::Debug => load_debug_models(app),
        Page::Settings => {}
    }
}

/// 加载账户列表的指定页；已有请求在途时丢弃本次触发
pub(crate) fn load_accounts(app: &mut App, page: u32) {
    if !app.accounts.begin_load() {
        log::debug!("Account list load already in flight, trigger dropped");
        return;
    }
    app.backend.load_accounts(
        page.max(1),
        app.accounts.page_size,
        app.accounts.search.applied.clone(),
    );
}

/// 重新拉取全部模型
pub(crate) fn load_models(app: &mut App) {
    app.models.loading = true;
    app.backend.load_models(app.models.search.applied.clone());
}

pub(crate) fn load_debug_models(app: &mut App) {
    app.debug.loading = true;
    app.backend.load_debug_models();
}
