//! 防抖搜索框

use std::time::{Duration, Instant};

/// 停止输入多久后才触发搜索
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

/// 列表页顶部的搜索框
#[derive(Debug, Default, Clone)]
pub struct SearchBox {
    /// 输入框中的原始文本
    pub input: String,
    /// 最近一次实际用于加载的查询（已 trim）
    pub applied: String,
    /// 是否正在编辑
    pub editing: bool,
    deadline: Option<Instant>,
}

impl SearchBox {
    pub fn push(&mut self, c: char, now: Instant) {
        self.input.push(c);
        self.deadline = Some(now + SEARCH_DEBOUNCE);
    }

    pub fn pop(&mut self, now: Instant) {
        if self.input.pop().is_some() {
            self.deadline = Some(now + SEARCH_DEBOUNCE);
        }
    }

    /// 到期后返回需要加载的新查询；trim 后与上次相同则不返回
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        let query = self.input.trim();
        if query == self.applied {
            return None;
        }
        self.applied = query.to_string();
        Some(self.applied.clone())
    }

    /// 清空输入与已应用的查询
    pub fn clear(&mut self) {
        self.input.clear();
        self.applied.clear();
        self.deadline = None;
        self.editing = false;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, at: Instant) -> SearchBox {
        let mut search = SearchBox::default();
        for c in text.chars() {
            search.push(c, at);
        }
        search
    }

    #[test]
    fn fires_only_after_debounce() {
        let t0 = Instant::now();
        let mut search = typed("abc", t0);
        assert_eq!(search.poll(t0 + Duration::from_millis(999)), None);
        assert_eq!(
            search.poll(t0 + SEARCH_DEBOUNCE),
            Some("abc".to_string())
        );
        assert!(!search.is_pending());
    }

    #[test]
    fn each_keystroke_restarts_timer() {
        let t0 = Instant::now();
        let mut search = typed("a", t0);
        search.push('b', t0 + Duration::from_millis(800));
        assert_eq!(search.poll(t0 + Duration::from_millis(1200)), None);
        assert_eq!(
            search.poll(t0 + Duration::from_millis(1800)),
            Some("ab".to_string())
        );
    }

    #[test]
    fn unchanged_trimmed_query_does_not_fire() {
        let t0 = Instant::now();
        let mut search = typed("abc", t0);
        let later = t0 + SEARCH_DEBOUNCE;
        assert!(search.poll(later).is_some());
        search.push(' ', later);
        assert_eq!(search.poll(later + SEARCH_DEBOUNCE), None);
    }

    #[test]
    fn clear_resets_everything() {
        let t0 = Instant::now();
        let mut search = typed("abc", t0);
        search.editing = true;
        search.clear();
        assert!(search.input.is_empty());
        assert!(!search.editing);
        assert_eq!(search.poll(t0 + SEARCH_DEBOUNCE), None);
    }
}
