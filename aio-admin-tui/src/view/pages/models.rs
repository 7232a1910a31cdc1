//! 模型管理页面视图

use aio_admin_core::format::format_datetime;
use aio_admin_core::types::{Model, ModelProvider};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{pagination, search};
use crate::view::theme::{colors, Styles};

/// 渲染模型管理页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(search::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(pagination::HEIGHT),
        ])
        .split(area);

    search::render(
        frame,
        chunks[0],
        &app.models.search,
        &app.t("models.searchPlaceholder"),
        app.focus.is_content(),
    );

    let visible = app.models.visible();
    if visible.is_empty() {
        let key = if app.models.loading {
            "common.loading"
        } else {
            "models.empty"
        };
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {}", app.t(key)), Styles::muted()),
            Line::from(""),
            Line::styled(format!("  Alt+a: {}", app.t("models.add")), Styles::placeholder()),
        ];
        frame.render_widget(Paragraph::new(content), chunks[1]);
    } else {
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, model)| model_card(app, model, i == app.models.selected))
            .collect();
        let mut state = ListState::default();
        state.select(Some(app.models.selected));
        frame.render_stateful_widget(List::new(items), chunks[1], &mut state);
    }

    pagination::render(frame, chunks[2], &app.models.pagination(), &app.i18n);
}

/// 单个模型卡片
fn model_card(app: &App, model: &Model, is_selected: bool) -> ListItem<'static> {
    let c = colors();
    let marker = if is_selected { "▌ " } else { "  " };
    let id_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };

    let mut title = vec![
        Span::styled(marker, Style::default().fg(c.highlight)),
        Span::styled(model.model_id.clone(), id_style),
    ];
    if model.provider == ModelProvider::Claude {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!("[{}]", app.t("models.claudeBadge")),
            Style::default().fg(c.accent),
        ));
    }
    let (status, status_color) = if model.enabled {
        (app.t("common.enabled"), c.success)
    } else {
        (app.t("common.disabled"), c.muted)
    };
    title.push(Span::raw("  "));
    title.push(Span::styled(format!("● {status}"), Style::default().fg(status_color)));

    let associations = if model.ass_model_ids.is_empty() {
        app.t("common.none")
    } else {
        model.ass_model_ids.join(", ")
    };

    let lines = vec![
        Line::from(title),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}: ", app.t("models.provider")), Styles::muted()),
            Span::styled(model.provider.as_str(), Style::default().fg(c.fg)),
            Span::raw("  "),
            Span::styled(
                format!("{}: {}", app.t("models.updatedAt"), format_datetime(model.updated_at)),
                Styles::muted(),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}: ", app.t("models.assModelIds")), Styles::muted()),
            Span::styled(associations, Style::default().fg(c.fg)),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines)
}
