//! 弹窗组件

use aio_admin_core::association::AssociationSelector;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::state::{
    AccountField, AccountForm, AssociationField, Modal, ModelForm, ModelFormFocus,
};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 关联模型列表最多显示的行数
const ASSOC_LIST_ROWS: usize = 8;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AccountForm(form) => render_account_form(app, frame, form),
        Modal::ModelForm(form) => render_model_form(app, frame, form),
        Modal::ConfirmDelete {
            item_name, focus, ..
        } => render_confirm_delete(app, frame, item_name, *focus),
        Modal::Help => render_help(app, frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制弹窗边框，返回内容区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 字段标签
fn label(text: String, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::muted()
    };
    Line::from(Span::styled(text, style))
}

/// 文本输入行：为空且未聚焦时显示占位文字
fn text_value(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let c = colors();
    if value.is_empty() && !focused {
        return Line::styled(format!("  {placeholder}"), Styles::placeholder());
    }
    let cursor = if focused { "▎" } else { "" };
    let style = if focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };
    Line::styled(format!("  {value}{cursor}"), style)
}

/// 左右切换的选择器行
fn selector_value(value: &str, focused: bool) -> Line<'static> {
    let c = colors();
    if focused {
        Line::styled(
            format!("  ◀ {value} ▶"),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(format!("    {value}"), Style::default().fg(c.fg))
    }
}

fn error_line(error: Option<&String>) -> Option<Line<'static>> {
    error.map(|err| Line::styled(format!("  ⚠ {err}"), Style::default().fg(colors().error)))
}

/// 渲染账户表单弹窗
fn render_account_form(app: &App, frame: &mut Frame, form: &AccountForm) {
    let c = colors();
    let title = if form.is_editing() {
        app.t("accounts.editTitle")
    } else {
        app.t("accounts.addTitle")
    };

    // 4 个字段各 3 行 + 错误 2 行 + 提示 2 行 + 边框
    let area = centered_rect(60, 20, frame.area());
    let inner = modal_frame(frame, area, &title, c.border_focused);

    if form.loading {
        let line = Line::styled(app.t("common.loading"), Styles::muted());
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), inner);
        return;
    }

    let mut lines = Vec::new();

    // 编辑时名称不可修改
    let name_focused = form.focus == AccountField::Name;
    lines.push(label(app.t("accounts.name"), name_focused));
    if form.is_editing() {
        lines.push(Line::styled(format!("  {}", form.name), Styles::muted()));
    } else {
        lines.push(text_value(&form.name, &app.t("accounts.namePlaceholder"), name_focused));
    }
    lines.push(Line::from(""));

    let url_focused = form.focus == AccountField::BaseUrl;
    lines.push(label(app.t("accounts.baseURL"), url_focused));
    lines.push(text_value(
        &form.base_url,
        &app.t("accounts.baseURLPlaceholder"),
        url_focused,
    ));
    lines.push(Line::from(""));

    let key_focused = form.focus == AccountField::ApiKey;
    let key_label = if form.show_secret {
        app.t("accounts.apiKey")
    } else {
        format!("{} ⊖", app.t("accounts.apiKey"))
    };
    lines.push(label(key_label, key_focused));
    let shown_key = if form.show_secret {
        form.api_key.clone()
    } else {
        "•".repeat(form.api_key.chars().count().min(32))
    };
    lines.push(text_value(&shown_key, &app.t("accounts.apiKeyPlaceholder"), key_focused));
    lines.push(Line::from(""));

    let ext_focused = form.focus == AccountField::Ext;
    lines.push(label(app.t("accounts.extInfo"), ext_focused));
    lines.push(text_value(&form.ext, &app.t("accounts.extInfoPlaceholder"), ext_focused));
    lines.push(Line::from(""));

    if let Some(line) = error_line(form.error.as_ref()) {
        lines.push(line);
    }

    let submit = if form.submitting {
        app.t("common.loading")
    } else if form.is_editing() {
        app.t("accounts.update")
    } else {
        app.t("accounts.save")
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", Styles::hint_key()),
        Span::styled(format!(" {} | ", app.t("hints.nextField")), Styles::hint_desc()),
        Span::styled("Alt+v", Styles::hint_key()),
        Span::styled(format!(" {} | ", app.t("accounts.apiKey")), Styles::hint_desc()),
        Span::styled("Enter", Styles::hint_key()),
        Span::styled(format!(" {submit} | "), Styles::hint_desc()),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(format!(" {}", app.t("common.cancel")), Styles::hint_desc()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染模型表单弹窗
fn render_model_form(app: &App, frame: &mut Frame, form: &ModelForm) {
    let c = colors();
    let title = if form.is_editing() {
        app.t("models.editTitle")
    } else {
        app.t("models.addTitle")
    };

    let area = centered_rect(64, 30, frame.area());
    let inner = modal_frame(frame, area, &title, c.border_focused);

    let mut lines = Vec::new();

    // 模型 ID：编辑时只读
    let id_focused = form.focus == ModelFormFocus::ModelId;
    lines.push(label(app.t("models.modelId"), id_focused));
    if form.is_editing() {
        lines.push(Line::styled(format!("  {}", form.model_id), Styles::muted()));
    } else {
        lines.push(text_value(
            &form.model_id,
            &app.t("models.modelIdPlaceholder"),
            id_focused,
        ));
    }

    let provider_focused = form.focus == ModelFormFocus::Provider;
    lines.push(label(app.t("models.provider"), provider_focused));
    lines.push(selector_value(form.provider.as_str(), provider_focused));

    let enabled_focused = form.focus == ModelFormFocus::Enabled;
    let enabled_text = if form.enabled {
        app.t("common.enabled")
    } else {
        app.t("common.disabled")
    };
    lines.push(label(app.t("models.enabled"), enabled_focused));
    lines.push(selector_value(&enabled_text, enabled_focused));
    lines.push(Line::from(""));

    lines.push(label(
        app.t("models.assModelIds"),
        matches!(
            form.focus,
            ModelFormFocus::AssocSearch | ModelFormFocus::AssocList | ModelFormFocus::CustomInput
        ),
    ));
    match &form.association {
        AssociationField::Loading => {
            lines.push(Line::styled(format!("  {}", app.t("association.loading")), Styles::muted()));
        }
        AssociationField::Failed => {
            lines.push(Line::styled(
                format!("  {}", app.t("association.loadError")),
                Style::default().fg(c.error),
            ));
        }
        AssociationField::Ready(selector) => association_lines(app, form, selector, &mut lines),
    }

    lines.push(Line::from(""));
    if let Some(line) = error_line(form.error.as_ref()) {
        lines.push(line);
    }

    let submit = if form.submitting {
        app.t("common.loading")
    } else if form.is_editing() {
        app.t("models.update")
    } else {
        app.t("models.save")
    };
    lines.push(Line::from(vec![
        Span::styled("  Space", Styles::hint_key()),
        Span::styled(format!(" {} | ", app.t("hints.check")), Styles::hint_desc()),
        Span::styled("Alt+s", Styles::hint_key()),
        Span::styled(format!(" {} | ", app.t("hints.selectAll")), Styles::hint_desc()),
        Span::styled("Enter", Styles::hint_key()),
        Span::styled(format!(" {submit}"), Styles::hint_desc()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 关联模型区域：搜索框、自定义行、已知模型列表
fn association_lines(
    app: &App,
    form: &ModelForm,
    selector: &AssociationSelector,
    lines: &mut Vec<Line<'static>>,
) {
    let c = colors();
    let structured = selector.is_structured_enabled();
    let list_focused = form.focus == ModelFormFocus::AssocList;

    // 搜索框（自定义模式下禁用）
    let search_focused = form.focus == ModelFormFocus::AssocSearch;
    if structured {
        lines.push(text_value(
            selector.search(),
            &format!("⌕ {}", app.t("association.searchPlaceholder")),
            search_focused,
        ));
    } else {
        lines.push(Line::styled(
            format!("  ⌕ {}", app.t("association.searchPlaceholder")),
            Styles::placeholder(),
        ));
    }

    let row_style = |row: usize| {
        if list_focused && form.cursor == row {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        }
    };
    let checkbox = |checked: bool| if checked { "[x]" } else { "[ ]" };

    // 第 0 行：自定义
    lines.push(Line::styled(
        format!(
            "  {} {}",
            checkbox(selector.is_custom_mode()),
            app.t("association.customMode")
        ),
        row_style(0),
    ));
    if selector.is_custom_mode() {
        lines.push(text_value(
            selector.custom_value(),
            &app.t("association.customPlaceholder"),
            form.focus == ModelFormFocus::CustomInput,
        ));
    }

    if selector.is_universe_empty() {
        lines.push(Line::styled(
            format!("  {}", app.t("association.noOtherModels")),
            Styles::muted(),
        ));
        return;
    }

    let visible = selector.visible_indices();
    if visible.is_empty() {
        lines.push(Line::styled(
            format!("  {}", app.t("association.noMatches")),
            Styles::muted(),
        ));
        return;
    }

    // 让光标所在行始终可见
    let offset = form.cursor.saturating_sub(ASSOC_LIST_ROWS);
    let rows = selector.rows();
    for (position, &index) in visible.iter().enumerate().skip(offset).take(ASSOC_LIST_ROWS) {
        let row = &rows[index];
        let style = if structured {
            row_style(position + 1)
        } else {
            Styles::placeholder()
        };
        lines.push(Line::styled(
            format!("  {} {}", checkbox(row.checked), row.id),
            style,
        ));
    }
    if visible.len() > offset + ASSOC_LIST_ROWS {
        lines.push(Line::styled(
            format!("  … +{}", visible.len() - offset - ASSOC_LIST_ROWS),
            Styles::muted(),
        ));
    }
}

/// 渲染确认删除弹窗
fn render_confirm_delete(app: &App, frame: &mut Frame, item_name: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(50, 9, frame.area());
    let inner = modal_frame(frame, area, &app.t("common.delete"), c.error);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", app.t("common.confirmDelete")), Style::default().fg(c.fg)),
        Line::styled(format!("  \"{item_name}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", app.t("common.cancel")), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", app.t("common.delete")), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(app: &App, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(58, 26, frame.area());
    let inner = modal_frame(frame, area, &app.t("help.title"), c.border_focused);

    let section = |key: &str| {
        Line::styled(
            app.t(key),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |keys: &'static str, key: &str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(app.t(key), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section("help.global"),
        entry("Tab", "help.switchPanel"),
        entry("↑↓ / jk", "help.moveUpDown"),
        entry("Enter", "help.confirm"),
        entry("Esc", "help.back"),
        entry("Alt+r", "help.refresh"),
        entry("Alt+q", "help.quit"),
        Line::from(""),
        section("help.lists"),
        entry("/", "help.search"),
        entry("[ ] / PgUp", "help.pages"),
        entry("Alt+a/e/d", "help.crud"),
        entry("Alt+t", "help.toggle"),
        Line::from(""),
        section("help.forms"),
        entry("Tab", "help.fields"),
        entry("Space", "help.space"),
        entry("Alt+s", "help.selectAll"),
        Line::from(""),
        Line::styled(app.t("help.close"), Styles::placeholder()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
