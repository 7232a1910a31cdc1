//! 调试信息页面视图

use aio_admin_core::format::mask_api_key;
use aio_admin_core::types::Account;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::state::{DebugState, ModelDropdown};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 下拉框最多显示的行数
const DROPDOWN_ROWS: u16 = 10;

/// 渲染调试页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_toolbar(app, frame, chunks[0]);
    render_accounts(app, frame, chunks[1]);

    // 下拉框覆盖在账户列表上方
    if let Some(ref dropdown) = app.debug.dropdown {
        render_dropdown(app, frame, chunks[1], dropdown);
    }
}

/// 模型选择器 + 刷新按钮
fn render_toolbar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let debug = &app.debug;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(area);

    let selector = match debug.selected_model.as_deref() {
        Some(id) => Line::from(vec![
            Span::styled(id.to_string(), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::styled("  ▼", Styles::muted()),
        ]),
        None => Line::from(vec![
            Span::styled(app.t("debug.selectModel"), Styles::placeholder()),
            Span::styled("  ▼", Styles::muted()),
        ]),
    };
    let selector_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(debug.dropdown.is_some()));
    frame.render_widget(Paragraph::new(selector).block(selector_block), columns[0]);

    let (label, style) = if debug.refreshing {
        (app.t("debug.refreshing"), Styles::muted())
    } else {
        (
            format!("Alt+l {}", app.t("debug.refresh")),
            Style::default().fg(c.highlight),
        )
    };
    let button = Paragraph::new(Line::styled(format!(" ⟳ {label}"), style))
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border(false)));
    frame.render_widget(button, columns[1]);
}

/// 选中模型对应的账户卡片
fn render_accounts(app: &App, frame: &mut Frame, area: Rect) {
    let debug = &app.debug;

    let message = match debug.selected_accounts() {
        None => Some(app.t("debug.selectModelFirst")),
        Some(_) if debug.loading => Some(app.t("debug.loadingData")),
        Some([]) => Some(app.t("debug.noAccountsFound")),
        Some(_) => None,
    };
    if let Some(message) = message {
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let accounts = debug.selected_accounts().unwrap_or_default();
    let mut lines = Vec::new();
    if let Some(id) = debug.selected_model.as_deref() {
        lines.push(Line::styled(
            format!("  {}", app.i18n.t_with("debug.accountsFor", &[("model", id)])),
            Styles::title(),
        ));
        lines.push(Line::from(""));
    }
    for account in accounts.iter().skip(debug.scroll) {
        lines.extend(account_card(app, account));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn account_card(app: &App, account: &Account) -> Vec<Line<'static>> {
    let c = colors();
    let (badge, badge_color) = if account.enabled {
        (app.t("common.active"), c.success)
    } else {
        (app.t("common.inactive"), c.muted)
    };

    vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(account.name.clone(), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
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
        ]),
        Line::from(""),
    ]
}

/// 可搜索的模型下拉框
fn render_dropdown(app: &App, frame: &mut Frame, area: Rect, dropdown: &ModelDropdown) {
    let c = colors();
    let debug: &DebugState = &app.debug;
    let height = (DROPDOWN_ROWS + 3).min(area.height);
    let popup = Rect::new(area.x, area.y, area.width.min(60), height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let query = if dropdown.query.is_empty() {
        Line::styled(format!("⌕ {}▎", app.t("debug.searchModel")), Styles::placeholder())
    } else {
        Line::styled(format!("⌕ {}▎", dropdown.query), Style::default().fg(c.highlight))
    };
    frame.render_widget(Paragraph::new(query), rows[0]);

    // 缓存为空时：加载失败提示重试，否则视为仍在加载
    let status = if debug.models.is_empty() {
        Some(if debug.load_failed && !debug.loading {
            app.t("debug.loadFailedRetry")
        } else {
            app.t("common.loading")
        })
    } else {
        None
    };
    if let Some(status) = status {
        frame.render_widget(Paragraph::new(Line::styled(status, Styles::muted())), rows[1]);
        return;
    }

    let matches = dropdown.filter(&debug.models);
    if matches.is_empty() {
        let line = Line::styled(app.t("debug.noMatchingModels"), Styles::muted());
        frame.render_widget(Paragraph::new(line), rows[1]);
        return;
    }

    let items: Vec<ListItem> = matches
        .iter()
        .map(|model| {
            let selected = debug.selected_model.as_deref() == Some(model.id.as_str());
            let check = if selected { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(check, Style::default().fg(c.success)),
                Span::styled(model.id.clone(), Style::default().fg(c.fg)),
                Span::styled(format!(" ({})", model.account_list.len()), Styles::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(dropdown.cursor));
    frame.render_stateful_widget(list, rows[1], &mut state);
}
