//! 应用主状态结构

use std::sync::Arc;
use std::time::Instant;

use aio_admin_core::i18n::Translator;

use super::{
    AccountsState, DebugState, FocusPanel, ModalState, ModelsState, NavigationState, Page,
    SettingsState, Toast, ToastKind,
};
use crate::backend::{AppConfig, ConfigService, RegistryService};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 是否需要重建应用（切换语言后置位）
    pub reload_requested: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,
    /// 导航状态
    pub navigation: NavigationState,
    /// 当前页面
    pub current_page: Page,

    /// 状态栏提示
    pub toast: Option<Toast>,
    /// 翻译器
    pub i18n: Translator,

    /// 当前配置
    pub config: AppConfig,
    /// 配置存储
    pub config_store: Arc<dyn ConfigService>,

    // === 各页面状态 ===
    pub accounts: AccountsState,
    pub models: ModelsState,
    pub debug: DebugState,
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 后端服务句柄
    pub backend: RegistryService,

    /// 模型表单打开计数
    form_serial: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        config: AppConfig,
        config_store: Arc<dyn ConfigService>,
        i18n: Translator,
        backend: RegistryService,
    ) -> Self {
        Self {
            should_quit: false,
            reload_requested: false,
            focus: FocusPanel::default(),
            navigation: NavigationState::new(),
            current_page: Page::default(),
            toast: None,
            i18n,
            accounts: AccountsState::new(config.page_size),
            models: ModelsState::new(),
            debug: DebugState::new(),
            settings: SettingsState::new(),
            modal: ModalState::new(),
            config,
            config_store,
            backend,
            form_serial: 0,
        }
    }

    /// 翻译快捷方法
    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key)
    }

    /// 显示提示
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message, Instant::now()));
    }

    pub fn toast_success(&mut self, key: &str) {
        let message = self.t(key);
        self.show_toast(ToastKind::Success, message);
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.show_toast(ToastKind::Error, message);
    }

    pub fn toast_info(&mut self, key: &str) {
        let message = self.t(key);
        self.show_toast(ToastKind::Info, message);
    }

    /// 清除过期的提示
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    /// 为新打开的模型表单分配序号
    pub fn next_form_serial(&mut self) -> u64 {
        self.form_serial += 1;
        self.form_serial
    }
}
