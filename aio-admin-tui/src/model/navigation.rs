//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Accounts,
    Models,
    Debug,
    Settings,
}

impl NavItemId {
    /// 对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Accounts => Page::Accounts,
            NavItemId::Models => Page::Models,
            NavItemId::Debug => Page::Debug,
            NavItemId::Settings => Page::Settings,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    /// 标签的翻译键
    pub label_key: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Accounts,
                    label_key: "nav.accounts",
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Models,
                    label_key: "nav.models",
                    icon: "◆",
                },
                NavItem {
                    id: NavItemId::Debug,
                    label_key: "nav.debug",
                    icon: "●",
                },
                NavItem {
                    id: NavItemId::Settings,
                    label_key: "nav.settings",
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
