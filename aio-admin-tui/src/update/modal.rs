//! 弹窗更新逻辑

use aio_admin_core::ValidationError;

use crate::message::ModalMessage;
use crate::model::state::{AccountForm, DeleteTarget, Modal, ModelForm, ModelFormFocus};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close) {
        app.modal.close();
        return;
    }

    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };

    match modal {
        Modal::AccountForm(form) => {
            if handle_account_form(form, msg) {
                submit_account(app);
            }
        }
        Modal::ModelForm(form) => {
            if handle_model_form(form, msg) {
                submit_model(app);
            }
        }
        Modal::ConfirmDelete { target, focus, .. } => match msg {
            ModalMessage::ToggleDeleteFocus
            | ModalMessage::NextField
            | ModalMessage::PrevField
            | ModalMessage::CyclePrev
            | ModalMessage::CycleNext => {
                *focus = 1 - *focus;
            }
            ModalMessage::Confirm => {
                let confirmed = *focus == 1;
                let target = *target;
                app.modal.close();
                if confirmed {
                    delete(app, target);
                }
            }
            _ => {}
        },
        Modal::Help => {
            if matches!(msg, ModalMessage::Confirm) {
                app.modal.close();
            }
        }
    }
}

/// 处理账户表单输入；返回 true 表示需要提交
fn handle_account_form(form: &mut AccountForm, msg: ModalMessage) -> bool {
    match msg {
        ModalMessage::NextField | ModalMessage::CursorDown => form.next_field(),
        ModalMessage::PrevField | ModalMessage::CursorUp => form.prev_field(),
        ModalMessage::Input(c) => form.input(c),
        ModalMessage::Backspace => form.backspace(),
        ModalMessage::ToggleSecrets => form.show_secret = !form.show_secret,
        ModalMessage::Confirm => return !form.loading && !form.submitting,
        _ => {}
    }
    false
}

fn submit_account(app: &mut App) {
    let Some(form) = app.modal.account_form_mut() else {
        return;
    };
    match form.build_payload() {
        Ok(payload) => {
            form.error = None;
            form.submitting = true;
            match form.editing_id {
                Some(id) => app.backend.update_account(id, payload),
                None => app.backend.create_account(payload),
            }
        }
        Err(e) => reject_account(app, e),
    }
}

fn reject_account(app: &mut App, error: ValidationError) {
    let message = app.t(error.message_key());
    if let Some(form) = app.modal.account_form_mut() {
        form.error = Some(message.clone());
    }
    app.toast_error(message);
}

/// 处理模型表单输入；返回 true 表示需要提交
fn handle_model_form(form: &mut ModelForm, msg: ModalMessage) -> bool {
    match msg {
        ModalMessage::NextField => form.next_field(),
        ModalMessage::PrevField => form.prev_field(),
        ModalMessage::CursorUp => {
            if form.focus == ModelFormFocus::AssocList {
                form.cursor_up();
            } else {
                form.prev_field();
            }
        }
        ModalMessage::CursorDown => {
            if form.focus == ModelFormFocus::AssocList {
                form.cursor_down();
            } else {
                form.next_field();
            }
        }
        ModalMessage::CyclePrev => form.cycle_prev(),
        ModalMessage::CycleNext => form.cycle_next(),
        ModalMessage::Check => match form.focus {
            ModelFormFocus::AssocList => form.toggle_at_cursor(),
            ModelFormFocus::Enabled | ModelFormFocus::Provider => form.cycle_next(),
            _ => form.input(' '),
        },
        ModalMessage::SelectAll => form.select_all(),
        ModalMessage::Input(c) => form.input(c),
        ModalMessage::Backspace => form.backspace(),
        ModalMessage::Confirm => return !form.submitting,
        _ => {}
    }
    false
}

fn submit_model(app: &mut App) {
    let Some(form) = app.modal.model_form_mut() else {
        return;
    };
    match form.build_payload() {
        Ok(payload) => {
            form.error = None;
            form.submitting = true;
            let id = form.editing_id;
            app.backend.save_model(id, payload);
        }
        Err(e) => {
            let message = app.t(e.message_key());
            if let Some(form) = app.modal.model_form_mut() {
                form.error = Some(message.clone());
            }
            app.toast_error(message);
        }
    }
}

fn delete(app: &mut App, target: DeleteTarget) {
    match target {
        DeleteTarget::Account(id) => app.backend.delete_account(id),
        DeleteTarget::Model(id) => app.backend.delete_model(id),
    }
}
