//! 设置页面状态

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SettingItem::Theme => "settings.theme",
            SettingItem::Language => "settings.language",
        }
    }
}

/// 设置页面状态
///
/// 主题与语言的实际取值保存在配置中，这里只记录选中位置。
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.item_count() {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }
}
