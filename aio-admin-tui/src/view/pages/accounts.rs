//! 账户管理页面视图

use aio_admin_core::format::{format_relative, mask_api_key};
use aio_admin_core::types::Account;
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

/// 渲染账户管理页面
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
        &app.accounts.search,
        &app.t("accounts.searchPlaceholder"),
        app.focus.is_content(),
    );

    if app.accounts.loading && app.accounts.accounts.is_empty() {
        render_message(frame, chunks[1], &app.t("common.loading"));
    } else if app.accounts.accounts.is_empty() {
        render_empty(app, frame, chunks[1]);
    } else {
        render_list(app, frame, chunks[1]);
    }

    pagination::render(frame, chunks[2], &app.accounts.pagination, &app.i18n);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", app.t("accounts.empty")), Styles::muted()),
        Line::from(""),
        Line::styled(format!("  Alt+a: {}", app.t("accounts.add")), Styles::placeholder()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染账户卡片列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .accounts
        .accounts
        .iter()
        .enumerate()
        .map(|(i, account)| account_card(app, account, i == app.accounts.selected))
        .collect();

    let list = List::new(items);

    let mut state = ListState::default();
    state.select(Some(app.accounts.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 单个账户卡片（三行 + 空行）
fn account_card(app: &App, account: &Account, is_selected: bool) -> ListItem<'static> {
    let c = colors();
    let marker = if is_selected { "▌ " } else { "  " };
    let name_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };

    let (badge, badge_color) = if account.enabled {
        (app.t("common.active"), c.success)
    } else {
        (app.t("common.inactive"), c.muted)
    };

    let name = if account.name.is_empty() {
        app.t("common.unknown")
    } else {
        account.name.clone()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(c.highlight)),
            Span::styled(name, name_style),
            Span::raw("  "),
            Span::styled(format!("[{badge}]"), Style::default().fg(badge_color)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}: ", app.t("accounts.baseURL")), Styles::muted()),
            Span::styled(account.base_url.clone(), Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}: ", app.t("accounts.apiKey")), Styles::muted()),
            Span::styled(mask_api_key(&account.api_key), Style::default().fg(c.fg)),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{}: {}",
                    app.t("accounts.lastUpdated"),
                    format_relative(&app.i18n, account.updated_at)
                ),
                Styles::muted(),
            ),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines)
}
