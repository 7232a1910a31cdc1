//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::{Modal, ToastKind};
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 有提示消息时优先显示提示
    if let Some(ref toast) = app.toast {
        let c = colors();
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✓", c.success),
            ToastKind::Error => ("✗", c.error),
            ToastKind::Info => ("ℹ", c.warning),
        };
        let line = Line::from(Span::styled(
            format!(" {icon} {}", toast.message),
            Style::default()
                .bg(c.bg)
                .fg(color)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(c.bg)), area);
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, desc_key)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(app.t(desc_key), Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示（按键, 说明翻译键）
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.modal.active {
        Some(Modal::AccountForm(_)) => {
            hints.push(("Tab", "hints.nextField"));
            hints.push(("Enter", "hints.submit"));
            hints.push(("Esc", "common.cancel"));
            return hints;
        }
        Some(Modal::ModelForm(_)) => {
            hints.push(("Tab", "hints.nextField"));
            hints.push(("Space", "hints.check"));
            hints.push(("Alt+s", "hints.selectAll"));
            hints.push(("Enter", "hints.submit"));
            hints.push(("Esc", "common.cancel"));
            return hints;
        }
        Some(Modal::ConfirmDelete { .. } | Modal::Help) => {
            hints.push(("Enter", "common.confirm"));
            hints.push(("Esc", "common.cancel"));
            return hints;
        }
        None => {}
    }

    hints.push(("Tab", "hints.switchPanel"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "hints.navigate"));
            hints.push(("Enter", "hints.open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Accounts | Page::Models => {
                hints.push(("↑↓", "hints.select"));
                hints.push(("/", "hints.search"));
                hints.push(("[ ]", "hints.page"));
                hints.push(("Alt+a", "hints.add"));
                hints.push(("Alt+e", "hints.edit"));
                hints.push(("Alt+d", "hints.delete"));
                hints.push(("Alt+t", "hints.toggle"));
            }
            Page::Debug => {
                hints.push(("Enter", "hints.chooseModel"));
                hints.push(("Alt+l", "hints.reloadCache"));
            }
            Page::Settings => {
                hints.push(("↑↓", "hints.select"));
                hints.push(("←→", "hints.change"));
            }
        },
    }

    hints.push(("Alt+h", "hints.help"));
    hints.push(("Alt+q", "hints.quit"));
    hints
}
