//! 分页器组件

use aio_admin_core::i18n::Translator;
use aio_admin_core::pagination::{PageItem, Pagination};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::{colors, Styles};

/// 分页器高度
pub const HEIGHT: u16 = 2;

/// 渲染分页器，只有一页时不显示任何内容
pub fn render(frame: &mut Frame, area: Rect, pagination: &Pagination, tr: &Translator) {
    if !pagination.is_visible() {
        return;
    }

    let c = colors();
    let enabled = |on: bool| {
        if on {
            Style::default().fg(c.fg)
        } else {
            Styles::placeholder()
        }
    };

    let mut spans = vec![Span::styled(
        format!("‹ {}", tr.t("pagination.previous")),
        enabled(pagination.has_previous()),
    )];

    for item in pagination.window() {
        spans.push(Span::raw(" "));
        match item {
            PageItem::Page(page) if page == pagination.current => spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            )),
            PageItem::Page(page) => {
                spans.push(Span::styled(format!(" {page} "), Style::default().fg(c.fg)));
            }
            PageItem::Ellipsis => spans.push(Span::styled("…", Styles::muted())),
        }
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("{} ›", tr.t("pagination.next")),
        enabled(pagination.has_next()),
    ));

    let info = tr.t_with(
        "pagination.pageInfo",
        &[
            ("currentPage", &pagination.current.to_string()),
            ("totalPages", &pagination.total_pages.to_string()),
            ("totalItems", &pagination.total_items.to_string()),
        ],
    );

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(info, Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
