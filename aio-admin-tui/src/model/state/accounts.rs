//! 账户页面状态

use aio_admin_core::pagination::Pagination;
use aio_admin_core::types::{Account, AccountPage};

use super::SearchBox;

/// 账户页面状态
///
/// 账户列表由服务端分页，这里只保存当前页。
#[derive(Debug)]
pub struct AccountsState {
    /// 当前页的账户
    pub accounts: Vec<Account>,
    /// 分页信息
    pub pagination: Pagination,
    /// 每页条数
    pub page_size: u32,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否有加载请求在途
    pub loading: bool,
    /// 搜索框
    pub search: SearchBox,
}

impl AccountsState {
    pub fn new(page_size: u32) -> Self {
        Self {
            accounts: Vec::new(),
            pagination: Pagination::default(),
            page_size: page_size.max(1),
            selected: 0,
            loading: false,
            search: SearchBox::default(),
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.accounts.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.accounts.len().saturating_sub(1);
    }

    /// 获取当前选中的账户
    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts.get(self.selected)
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current
    }

    /// 尝试开始一次加载；已有请求在途时返回 false，调用方应丢弃本次触发
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// 应用服务端返回的一页数据
    pub fn apply_page(&mut self, page: AccountPage) {
        self.pagination = Pagination::new(page.page, page.total_pages, page.total);
        self.accounts = page.accounts;
        if self.selected >= self.accounts.len() {
            self.selected = self.accounts.len().saturating_sub(1);
        }
        self.loading = false;
    }

    /// 加载失败时退化为空列表
    pub fn fail_load(&mut self) {
        self.accounts.clear();
        self.pagination = Pagination::default();
        self.selected = 0;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(n: usize, page: u32, total_pages: u32) -> AccountPage {
        AccountPage {
            accounts: (0..n)
                .map(|i| Account {
                    id: i as i64 + 1,
                    name: format!("acc-{i}"),
                    ..Account::default()
                })
                .collect(),
            total: u32::try_from(n).unwrap(),
            total_pages,
            page,
            page_size: 10,
            search: String::new(),
        }
    }

    #[test]
    fn guard_drops_duplicate_loads() {
        let mut state = AccountsState::new(10);
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.apply_page(page_of(3, 1, 1));
        assert!(state.begin_load());
    }

    #[test]
    fn apply_page_clamps_selection() {
        let mut state = AccountsState::new(10);
        state.apply_page(page_of(5, 1, 1));
        state.selected = 4;
        state.apply_page(page_of(2, 2, 2));
        assert_eq!(state.selected, 1);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn failure_degrades_to_empty() {
        let mut state = AccountsState::new(10);
        state.apply_page(page_of(5, 3, 4));
        state.loading = true;
        state.fail_load();
        assert!(state.accounts.is_empty());
        assert!(!state.loading);
        assert!(!state.pagination.is_visible());
    }
}
