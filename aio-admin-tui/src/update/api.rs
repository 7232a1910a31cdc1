//! 后端请求结果处理

use aio_admin_core::types::Account;
use aio_admin_core::{CoreError, CoreResult};

use super::{load_accounts, load_debug_models, load_models};
use crate::message::ApiEvent;
use crate::model::state::Modal;
use crate::model::{App, ToastKind};

/// 处理后端请求完成事件
pub fn update(app: &mut App, event: ApiEvent) {
    match event {
        // ========== 账户 ==========
        ApiEvent::AccountsLoaded(Ok(page)) => app.accounts.apply_page(page),
        ApiEvent::AccountsLoaded(Err(e)) => {
            app.accounts.fail_load();
            toast_failure(app, "common.loadFailed", &e);
        }

        ApiEvent::AccountFetched(result) => account_fetched(app, result),

        ApiEvent::AccountCreated(Ok(())) => {
            close_account_form(app);
            app.toast_success("accounts.createSuccess");
            // 创建后回到第一页
            load_accounts(app, 1);
        }
        ApiEvent::AccountCreated(Err(e)) => {
            account_form_failed(app, "accounts.createFailed", &e);
        }

        ApiEvent::AccountUpdated(Ok(())) => {
            close_account_form(app);
            app.toast_success("accounts.updateSuccess");
            reload_accounts(app);
        }
        ApiEvent::AccountUpdated(Err(e)) => {
            account_form_failed(app, "accounts.updateFailed", &e);
        }

        ApiEvent::AccountDeleted(Ok(())) => {
            app.toast_success("accounts.deleteSuccess");
            reload_accounts(app);
        }
        ApiEvent::AccountDeleted(Err(e)) => toast_failure(app, "accounts.deleteFailed", &e),

        ApiEvent::AccountToggled(Ok(account)) => {
            let action = if account.enabled {
                app.t("common.enable")
            } else {
                app.t("common.disable")
            };
            let message = app
                .i18n
                .t_with("accounts.actionSuccess", &[("action", action.as_str())]);
            app.show_toast(ToastKind::Success, message);
            reload_accounts(app);
        }
        ApiEvent::AccountToggled(Err(e)) => toast_failure(app, "accounts.toggleFailed", &e),

        // ========== 模型 ==========
        ApiEvent::ModelsLoaded(Ok(models)) => app.models.set_models(models),
        ApiEvent::ModelsLoaded(Err(e)) => {
            app.models.fail_load();
            toast_failure(app, "common.loadFailed", &e);
        }

        ApiEvent::ModelSaved { is_update, result } => {
            let (ok_key, err_key) = if is_update {
                ("models.updateSuccess", "models.updateFailed")
            } else {
                ("models.createSuccess", "models.createFailed")
            };
            match result {
                Ok(()) => {
                    if matches!(app.modal.active, Some(Modal::ModelForm(_))) {
                        app.modal.close();
                    }
                    app.toast_success(ok_key);
                    load_models(app);
                }
                Err(e) => {
                    let message = failure_message(app, err_key, &e);
                    if let Some(form) = app.modal.model_form_mut() {
                        form.submitting = false;
                        form.error = Some(message.clone());
                    }
                    app.toast_error(message);
                }
            }
        }

        ApiEvent::ModelDeleted(Ok(())) => {
            app.toast_success("models.deleteSuccess");
            load_models(app);
        }
        ApiEvent::ModelDeleted(Err(e)) => toast_failure(app, "models.deleteFailed", &e),

        ApiEvent::ModelToggled(Ok(())) => {
            app.toast_success("models.toggleSuccess");
            load_models(app);
        }
        ApiEvent::ModelToggled(Err(e)) => toast_failure(app, "models.toggleFailed", &e),

        ApiEvent::AssociationUniverseLoaded { serial, result } => {
            // 表单已关闭或重新打开时丢弃旧结果
            let Some(form) = app.modal.model_form_mut().filter(|f| f.serial == serial) else {
                log::debug!("Dropping association universe for closed form #{serial}");
                return;
            };
            match result {
                Ok(models) => form.apply_universe(&models),
                Err(_) => form.fail_universe(),
            }
        }

        // ========== 调试 ==========
        ApiEvent::DebugModelsLoaded(Ok(models)) => app.debug.set_models(models),
        ApiEvent::DebugModelsLoaded(Err(e)) => {
            app.debug.fail_load();
            toast_failure(app, "debug.loadModelsFailed", &e);
        }

        ApiEvent::DebugReloadTriggered(Ok(())) => {
            app.toast_info("debug.refreshTriggered");
            app.backend.wait_for_cache();
        }
        ApiEvent::DebugReloadTriggered(Err(e)) => {
            app.debug.refreshing = false;
            toast_failure(app, "debug.refreshFailed", &e);
        }

        ApiEvent::DebugReloadWaitElapsed => {
            app.debug.refreshing = false;
            load_debug_models(app);
        }
    }
}

fn reload_accounts(app: &mut App) {
    let page = app.accounts.current_page();
    load_accounts(app, page);
}

fn account_fetched(app: &mut App, result: CoreResult<Account>) {
    match result {
        Ok(account) => {
            if let Some(form) = app
                .modal
                .account_form_mut()
                .filter(|f| f.editing_id == Some(account.id))
            {
                form.fill(account);
            }
        }
        Err(e) => {
            close_account_form(app);
            toast_failure(app, "accounts.loadAccountFailed", &e);
        }
    }
}

fn close_account_form(app: &mut App) {
    if app.modal.account_form_mut().is_some() {
        app.modal.close();
    }
}

fn account_form_failed(app: &mut App, key: &str, error: &CoreError) {
    let message = failure_message(app, key, error);
    if let Some(form) = app.modal.account_form_mut() {
        form.submitting = false;
        form.error = Some(message.clone());
    }
    app.toast_error(message);
}

fn failure_message(app: &App, key: &str, error: &CoreError) -> String {
    format!("{} {}", app.t(key), error.user_message())
}

fn toast_failure(app: &mut App, key: &str, error: &CoreError) {
    let message = failure_message(app, key, error);
    app.toast_error(message);
}
