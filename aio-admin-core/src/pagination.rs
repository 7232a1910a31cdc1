//! Pagination arithmetic shared by the list screens

/// Pages shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Build the page selector for `current` out of `total` pages.
///
/// First and last pages are always present, the current page is surrounded
/// by up to two neighbours per side, and gaps are marked with an ellipsis.
/// Returns nothing when there is at most one page.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(total);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }

    items
}

/// Current position within a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

impl Pagination {
    pub fn new(current: u32, total_pages: u32, total_items: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current: current.clamp(1, total_pages),
            total_pages,
            total_items,
        }
    }

    /// Pagination for a list that is sliced locally.
    pub fn for_items(current: u32, total_items: usize, per_page: u32) -> Self {
        let total_items = u32::try_from(total_items).unwrap_or(u32::MAX);
        Self::new(current, page_count(total_items, per_page), total_items)
    }

    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current, self.total_pages)
    }
}

/// Number of pages needed for `total_items`, at least one.
pub fn page_count(total_items: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page).max(1)
}

/// Items shown on `page` (1-based) when a list is paginated locally.
pub fn page_slice<T>(items: &[T], page: u32, per_page: u32) -> &[T] {
    let per_page = per_page as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn middle_of_ten() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn hidden_for_single_page() {
        assert!(page_window(1, 1).is_empty());
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn near_edges_no_ellipsis() {
        assert_eq!(
            page_window(1, 4),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(
            page_window(4, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn adjacent_to_first_and_last() {
        assert_eq!(
            page_window(3, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn prev_next_flags() {
        let p = Pagination::new(1, 3, 25);
        assert!(!p.has_previous());
        assert!(p.has_next());
        let p = Pagination::new(3, 3, 25);
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn local_slicing() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert_eq!(Pagination::for_items(1, 0, 10).total_pages, 1);
    }
}
