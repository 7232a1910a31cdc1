//! 调试页面状态

use aio_admin_core::types::{Account, DebugModel};

/// 可搜索的模型下拉框
#[derive(Debug, Default, Clone)]
pub struct ModelDropdown {
    /// 搜索关键字
    pub query: String,
    /// 过滤结果中的光标位置
    pub cursor: usize,
}

impl ModelDropdown {
    /// 按关键字过滤（大小写不敏感的子串匹配）
    pub fn filter<'a>(&self, models: &'a [DebugModel]) -> Vec<&'a DebugModel> {
        let needle = self.query.to_lowercase();
        models
            .iter()
            .filter(|m| m.id.to_lowercase().contains(&needle))
            .collect()
    }
}

/// 调试页面状态
#[derive(Debug, Default)]
pub struct DebugState {
    /// 缓存的调试模型列表
    pub models: Vec<DebugModel>,
    /// 是否已成功加载过
    pub loaded: bool,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次加载是否失败
    pub load_failed: bool,
    /// 当前选中的模型 ID
    pub selected_model: Option<String>,
    /// 打开中的下拉框
    pub dropdown: Option<ModelDropdown>,
    /// 是否正在触发服务端缓存刷新
    pub refreshing: bool,
    /// 账户卡片的滚动位置
    pub scroll: usize,
}

impl DebugState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_models(&mut self, models: Vec<DebugModel>) {
        self.models = models;
        self.loaded = true;
        self.loading = false;
        self.load_failed = false;
        self.clamp_scroll();
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
        self.load_failed = true;
    }

    /// 选中模型对应的账户列表；未选择模型时返回 None，
    /// 模型已不在缓存中时返回空切片
    pub fn selected_accounts(&self) -> Option<&[Account]> {
        let id = self.selected_model.as_deref()?;
        Some(
            self.models
                .iter()
                .find(|m| m.id == id)
                .map_or(&[][..], |m| m.account_list.as_slice()),
        )
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown = Some(ModelDropdown::default());
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    /// 选中下拉框光标处的模型并关闭下拉框
    pub fn choose_from_dropdown(&mut self) {
        let Some(dropdown) = self.dropdown.take() else {
            return;
        };
        if let Some(model) = dropdown.filter(&self.models).get(dropdown.cursor) {
            self.selected_model = Some(model.id.clone());
            self.scroll = 0;
        }
    }

    pub fn dropdown_up(&mut self) {
        if let Some(dropdown) = self.dropdown.as_mut() {
            dropdown.cursor = dropdown.cursor.saturating_sub(1);
        }
    }

    pub fn dropdown_down(&mut self) {
        if let Some(dropdown) = self.dropdown.as_mut() {
            let len = dropdown.filter(&self.models).len();
            if dropdown.cursor + 1 < len {
                dropdown.cursor += 1;
            }
        }
    }

    pub fn dropdown_input(&mut self, c: char) {
        if let Some(dropdown) = self.dropdown.as_mut() {
            dropdown.query.push(c);
            dropdown.cursor = 0;
        }
    }

    pub fn dropdown_backspace(&mut self) {
        if let Some(dropdown) = self.dropdown.as_mut() {
            dropdown.query.pop();
            dropdown.cursor = 0;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let len = self.selected_accounts().map_or(0, <[Account]>::len);
        if self.scroll + 1 < len {
            self.scroll += 1;
        }
    }

    fn clamp_scroll(&mut self) {
        let len = self.selected_accounts().map_or(0, <[Account]>::len);
        if self.scroll >= len {
            self.scroll = len.saturating_sub(1);
        }
    }
}
