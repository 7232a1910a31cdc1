//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 账户管理
    #[default]
    Accounts,
    /// 模型管理
    Models,
    /// 调试信息
    Debug,
    /// 设置
    Settings,
}

impl Page {
    /// 页面标题的翻译键
    pub fn title_key(self) -> &'static str {
        match self {
            Page::Accounts => "accounts.title",
            Page::Models => "models.title",
            Page::Debug => "debug.title",
            Page::Settings => "settings.title",
        }
    }
}
