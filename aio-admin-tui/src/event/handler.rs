//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{Modal, ModelFormFocus};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 普通字符（无修饰键或仅 Shift）
fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 搜索框或下拉框正在输入时，字符都交给输入框
    if app.focus.is_content() && is_text_entry(app) {
        return handle_text_entry_keys(key, app);
    }

    if DefaultKeymap::HELP.matches(&key) || plain_char(&key) == Some('?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

fn is_text_entry(app: &App) -> bool {
    match app.current_page {
        Page::Accounts => app.accounts.search.editing,
        Page::Models => app.models.search.editing,
        Page::Debug => app.debug.dropdown.is_some(),
        Page::Settings => false,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_TOGGLE.matches(&key) {
        return AppMessage::Content(ContentMessage::Toggle);
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearSearch);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::FocusSearch);
    }

    match app.current_page {
        Page::Accounts | Page::Models => handle_list_keys(key),
        Page::Debug => handle_debug_keys(key),
        Page::Settings => handle_settings_keys(key),
    }
}

/// 处理列表页面的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::PageUp | KeyCode::Char('[') => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::PageDown | KeyCode::Char(']') => AppMessage::Content(ContentMessage::NextPage),
        _ => AppMessage::Noop,
    }
}

/// 处理调试页面的按键
fn handle_debug_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::RELOAD_CACHE.matches(&key) {
        return AppMessage::Content(ContentMessage::ReloadCache);
    }
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Enter => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框/下拉框中的按键
fn handle_text_entry_keys(key: KeyEvent, app: &App) -> AppMessage {
    if let Some(c) = plain_char(&key) {
        return AppMessage::Content(ContentMessage::Input(c));
    }
    let dropdown = app.current_page == Page::Debug;
    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Esc => AppMessage::GoBack,
        KeyCode::Enter if dropdown => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Enter | KeyCode::Tab => AppMessage::Content(ContentMessage::FinishInput),
        KeyCode::Up if dropdown => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down if dropdown => AppMessage::Content(ContentMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::AccountForm(_) => handle_account_form_keys(key),
        Modal::ModelForm(form) => handle_model_form_keys(key, form.focus),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理账户表单的按键
fn handle_account_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRET.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleSecrets);
    }
    if let Some(c) = plain_char(&key) {
        return AppMessage::Modal(ModalMessage::Input(c));
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 处理模型表单的按键
fn handle_model_form_keys(key: KeyEvent, focus: ModelFormFocus) -> AppMessage {
    if DefaultKeymap::SELECT_ALL.matches(&key) {
        return AppMessage::Modal(ModalMessage::SelectAll);
    }

    let selector = matches!(focus, ModelFormFocus::Provider | ModelFormFocus::Enabled);
    let list = focus == ModelFormFocus::AssocList;

    match key.code {
        KeyCode::Tab => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Up => AppMessage::Modal(ModalMessage::CursorUp),
        KeyCode::Down => AppMessage::Modal(ModalMessage::CursorDown),
        KeyCode::Left if selector => AppMessage::Modal(ModalMessage::CyclePrev),
        KeyCode::Right if selector => AppMessage::Modal(ModalMessage::CycleNext),
        KeyCode::Char(' ') if selector || list => AppMessage::Modal(ModalMessage::Check),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        _ => match plain_char(&key) {
            Some(c) if !selector && !list => AppMessage::Modal(ModalMessage::Input(c)),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
