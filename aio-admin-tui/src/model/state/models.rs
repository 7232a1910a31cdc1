//! 模型页面状态

use aio_admin_core::pagination::{page_slice, Pagination};
use aio_admin_core::types::Model;

use super::SearchBox;

/// 模型列表每页条数（本地切片）
pub const MODELS_PER_PAGE: u32 = 10;

/// 模型页面状态
///
/// 模型一次性全部取回，分页在本地完成。
#[derive(Debug, Default)]
pub struct ModelsState {
    /// 全部模型
    pub models: Vec<Model>,
    /// 当前页码（从 1 开始）
    pub page: u32,
    /// 当前页内选中的索引
    pub selected: usize,
    /// 是否正在加载（仅用于显示，不阻止并发加载）
    pub loading: bool,
    /// 搜索框
    pub search: SearchBox,
}

impl ModelsState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::for_items(self.page, self.models.len(), MODELS_PER_PAGE)
    }

    /// 当前页可见的模型
    pub fn visible(&self) -> &[Model] {
        page_slice(&self.models, self.page, MODELS_PER_PAGE)
    }

    pub fn selected_model(&self) -> Option<&Model> {
        self.visible().get(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// 跳转到指定页，超出范围时忽略
    pub fn go_to_page(&mut self, page: u32) {
        let pagination = self.pagination();
        if page >= 1 && page <= pagination.total_pages && page != self.page {
            self.page = page;
            self.selected = 0;
        }
    }

    /// 替换模型列表，并把页码收回到有效范围
    pub fn set_models(&mut self, models: Vec<Model>) {
        self.models = models;
        self.page = self.pagination().current;
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        self.loading = false;
    }

    /// 加载失败时退化为空列表
    pub fn fail_load(&mut self) {
        self.models.clear();
        self.page = 1;
        self.selected = 0;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models(n: usize) -> Vec<Model> {
        (0..n)
            .map(|i| Model {
                id: i as i64,
                model_id: format!("aio_m{i}"),
                ..Model::default()
            })
            .collect()
    }

    #[test]
    fn slices_ten_per_page() {
        let mut state = ModelsState::new();
        state.set_models(models(25));
        assert_eq!(state.pagination().total_pages, 3);
        assert_eq!(state.visible().len(), 10);

        state.go_to_page(3);
        assert_eq!(state.visible().len(), 5);
        assert_eq!(state.visible()[0].model_id, "aio_m20");
    }

    #[test]
    fn out_of_range_page_is_ignored() {
        let mut state = ModelsState::new();
        state.set_models(models(15));
        state.go_to_page(0);
        state.go_to_page(3);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_is_clamped_when_list_shrinks() {
        let mut state = ModelsState::new();
        state.set_models(models(25));
        state.go_to_page(3);
        state.set_models(models(12));
        assert_eq!(state.page, 2);
        assert_eq!(state.visible().len(), 2);
    }
}
