//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 设置项的标签宽度（基于显示宽度对齐）
const LABEL_WIDTH: usize = 16;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 16;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let value = match item {
            SettingItem::Theme => app.t(app.config.theme.label_key()),
            SettingItem::Language => app.i18n.locale().display_name().to_string(),
        };
        lines.push(setting_row(
            &app.t(item.label_key()),
            &value,
            index == app.settings.selected_index,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", app.t("settings.languageHint")),
        Styles::muted(),
    ));
    lines.push(Line::from(vec![
        Span::styled(format!("  {}: ", app.t("settings.apiBaseUrl")), Styles::muted()),
        Span::styled(app.config.api_base_url.clone(), Style::default().fg(colors().fg)),
    ]));
    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn setting_row(label: &str, value: &str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available.saturating_sub(value.width()) / 2;
    let right_padding = available
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value.to_string(), value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}
