//! 内容面板更新逻辑

use std::time::Instant;

use super::{load_accounts, load_debug_models, load_models};
use crate::message::ContentMessage;
use crate::model::state::{AccountForm, DeleteTarget, Modal, ModelForm, SettingItem};
use crate::model::{App, Page};
use crate::view::theme::set_theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Accounts => update_accounts(app, msg),
        Page::Models => update_models(app, msg),
        Page::Debug => update_debug(app, msg),
        Page::Settings => update_settings(app, msg),
    }
}

fn update_accounts(app: &mut App, msg: ContentMessage) {
    let now = Instant::now();
    match msg {
        ContentMessage::SelectPrevious => app.accounts.select_previous(),
        ContentMessage::SelectNext => app.accounts.select_next(),
        ContentMessage::SelectFirst => app.accounts.select_first(),
        ContentMessage::SelectLast => app.accounts.select_last(),

        ContentMessage::Add => {
            app.modal.show(Modal::AccountForm(AccountForm::create()));
        }
        ContentMessage::Edit | ContentMessage::Confirm => {
            if let Some(id) = app.accounts.selected_account().map(|a| a.id) {
                app.modal.show(Modal::AccountForm(AccountForm::edit(id)));
                app.backend.fetch_account(id);
            }
        }
        ContentMessage::Delete => {
            if let Some(account) = app.accounts.selected_account() {
                let target = DeleteTarget::Account(account.id);
                let name = account.name.clone();
                app.modal.show_confirm_delete(target, &name);
            }
        }
        ContentMessage::Toggle => {
            if let Some(id) = app.accounts.selected_account().map(|a| a.id) {
                app.backend.toggle_account(id);
            }
        }

        ContentMessage::PrevPage => {
            if app.accounts.pagination.has_previous() {
                let page = app.accounts.current_page() - 1;
                load_accounts(app, page);
            }
        }
        ContentMessage::NextPage => {
            if app.accounts.pagination.has_next() {
                let page = app.accounts.current_page() + 1;
                load_accounts(app, page);
            }
        }

        ContentMessage::FocusSearch => app.accounts.search.editing = true,
        ContentMessage::Input(c) => {
            if app.accounts.search.editing {
                app.accounts.search.push(c, now);
            }
        }
        ContentMessage::Backspace => {
            if app.accounts.search.editing {
                app.accounts.search.pop(now);
            }
        }
        ContentMessage::FinishInput => app.accounts.search.editing = false,
        ContentMessage::ClearSearch => {
            app.accounts.search.clear();
            load_accounts(app, 1);
        }

        ContentMessage::ReloadCache | ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

fn update_models(app: &mut App, msg: ContentMessage) {
    let now = Instant::now();
    match msg {
        ContentMessage::SelectPrevious => app.models.select_previous(),
        ContentMessage::SelectNext => app.models.select_next(),
        ContentMessage::SelectFirst => app.models.select_first(),
        ContentMessage::SelectLast => app.models.select_last(),

        ContentMessage::Add => {
            let serial = app.next_form_serial();
            app.modal.show(Modal::ModelForm(ModelForm::create(serial)));
            app.backend.load_association_universe(serial);
        }
        ContentMessage::Edit | ContentMessage::Confirm => {
            let Some(model) = app.models.selected_model().cloned() else {
                return;
            };
            let serial = app.next_form_serial();
            app.modal.show(Modal::ModelForm(ModelForm::edit(serial, &model)));
            app.backend.load_association_universe(serial);
        }
        ContentMessage::Delete => {
            if let Some(model) = app.models.selected_model() {
                let target = DeleteTarget::Model(model.id);
                let name = model.model_id.clone();
                app.modal.show_confirm_delete(target, &name);
            }
        }
        ContentMessage::Toggle => {
            if let Some(id) = app.models.selected_model().map(|m| m.id) {
                app.backend.toggle_model(id);
            }
        }

        ContentMessage::PrevPage => {
            let page = app.models.page.saturating_sub(1);
            app.models.go_to_page(page);
        }
        ContentMessage::NextPage => {
            let page = app.models.page + 1;
            app.models.go_to_page(page);
        }

        ContentMessage::FocusSearch => app.models.search.editing = true,
        ContentMessage::Input(c) => {
            if app.models.search.editing {
                app.models.search.push(c, now);
            }
        }
        ContentMessage::Backspace => {
            if app.models.search.editing {
                app.models.search.pop(now);
            }
        }
        ContentMessage::FinishInput => app.models.search.editing = false,
        ContentMessage::ClearSearch => {
            app.models.search.clear();
            app.models.page = 1;
            app.models.selected = 0;
            load_models(app);
        }

        ContentMessage::ReloadCache | ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

fn update_debug(app: &mut App, msg: ContentMessage) {
    let dropdown_open = app.debug.dropdown.is_some();
    match msg {
        ContentMessage::Confirm => {
            if dropdown_open {
                app.debug.choose_from_dropdown();
            } else {
                if !app.debug.loaded && !app.debug.loading {
                    load_debug_models(app);
                }
                app.debug.open_dropdown();
            }
        }
        ContentMessage::SelectPrevious if dropdown_open => app.debug.dropdown_up(),
        ContentMessage::SelectNext if dropdown_open => app.debug.dropdown_down(),
        ContentMessage::SelectPrevious => app.debug.scroll_up(),
        ContentMessage::SelectNext => app.debug.scroll_down(),
        ContentMessage::SelectFirst => app.debug.scroll = 0,

        ContentMessage::Input(c) => app.debug.dropdown_input(c),
        ContentMessage::Backspace => app.debug.dropdown_backspace(),
        ContentMessage::FinishInput => app.debug.close_dropdown(),
        ContentMessage::FocusSearch => {
            if !dropdown_open {
                app.debug.open_dropdown();
            }
        }

        ContentMessage::ReloadCache => {
            if !app.debug.refreshing {
                app.debug.refreshing = true;
                app.backend.reload_debug_cache();
            }
        }

        _ => {}
    }
}

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::TogglePrev | ContentMessage::ToggleNext | ContentMessage::Confirm => {
            change_setting(app);
        }
        _ => {}
    }
}

/// 两个设置项都只有两种取值，向前向后切换效果相同
fn change_setting(app: &mut App) {
    match app.settings.current_item() {
        Some(SettingItem::Theme) => {
            app.config.theme = app.config.theme.next();
            set_theme(app.config.theme);
            save_config(app);
        }
        Some(SettingItem::Language) => {
            let previous = app.config.language.clone();
            let next = app.i18n.locale().next();
            app.config.language = Some(next.code().to_string());
            if save_config(app) {
                // 切换语言后重建整个应用
                app.reload_requested = true;
            } else {
                app.config.language = previous;
            }
        }
        None => {}
    }
}

fn save_config(app: &mut App) -> bool {
    match app.config_store.save(&app.config) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to save config: {e}");
            app.toast_error(e.to_string());
            false
        }
    }
}
