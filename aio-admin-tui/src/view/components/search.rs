//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::state::SearchBox;
use crate::view::theme::{colors, Styles};

/// 搜索框高度（含边框）
pub const HEIGHT: u16 = 3;

/// 渲染搜索框
pub fn render(frame: &mut Frame, area: Rect, search: &SearchBox, placeholder: &str, focused: bool) {
    let c = colors();
    let active = focused && search.editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(active));

    let line = if search.input.is_empty() && !active {
        Line::from(Span::styled(format!("/ {placeholder}"), Styles::placeholder()))
    } else {
        let cursor = if active { "▎" } else { "" };
        let mut spans = vec![
            Span::styled("/ ", Styles::muted()),
            Span::styled(format!("{}{cursor}", search.input), Style::default().fg(c.fg)),
        ];
        // 输入后等待防抖生效
        if search.is_pending() {
            spans.push(Span::styled("  …", Styles::muted()));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
