//! Update 层的端到端测试：消息 → 后端任务 → 结果消息 → 状态

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use aio_admin_core::types::{Account, Model};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{load_accounts, tick, update};
use crate::backend::mock::{test_app, MockRegistryApi};
use crate::backend::ConfigService;
use crate::message::{ApiEvent, AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{AssociationField, Modal, ModelFormFocus};
use crate::model::{App, FocusPanel, Page, ToastKind};

/// 等待并应用 n 条后端消息
async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, n: usize) {
    for _ in 0..n {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("backend message timed out")
            .expect("channel closed");
        update(app, msg);
    }
}

fn content(app: &mut App, msg: ContentMessage) {
    update(app, AppMessage::Content(msg));
}

fn modal(app: &mut App, msg: ModalMessage) {
    update(app, AppMessage::Modal(msg));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        modal(app, ModalMessage::Input(c));
    }
}

fn seed_accounts(api: &MockRegistryApi, n: usize) {
    *api.accounts.lock().unwrap() = (1..=n)
        .map(|i| Account {
            id: i as i64,
            name: format!("acc-{i}"),
            base_url: "https://api.example.com".into(),
            enabled: false,
            ..Account::default()
        })
        .collect();
}

#[tokio::test]
async fn submit_without_associations_is_blocked_without_network_calls() {
    let api = Arc::new(MockRegistryApi::with_debug_models(&["aio_a", "aio_b"]));
    let (mut app, mut rx, _) = test_app(&api);
    app.current_page = Page::Models;

    content(&mut app, ContentMessage::Add);
    pump(&mut app, &mut rx, 1).await;
    type_text(&mut app, "gpt4o");
    modal(&mut app, ModalMessage::Confirm);

    let expected = app.t("validation.assModelIdsRequired");
    let Some(Modal::ModelForm(form)) = &app.modal.active else {
        panic!("model form should stay open");
    };
    assert_eq!(form.error.as_deref(), Some(expected.as_str()));
    assert!(!form.submitting);

    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, expected);

    assert_eq!(api.calls("create_model"), 0);
    assert_eq!(api.calls("update_model"), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn created_model_is_normalized_and_list_reloaded() {
    let api = Arc::new(MockRegistryApi::with_debug_models(&["aio_a", "aio_b"]));
    let (mut app, mut rx, _) = test_app(&api);
    app.current_page = Page::Models;

    content(&mut app, ContentMessage::Add);
    pump(&mut app, &mut rx, 1).await;
    type_text(&mut app, "GPT4o");
    app.modal.model_form_mut().unwrap().focus = ModelFormFocus::AssocList;
    modal(&mut app, ModalMessage::CursorDown);
    modal(&mut app, ModalMessage::Check);
    modal(&mut app, ModalMessage::Confirm);

    // ModelSaved，然后是重新加载的 ModelsLoaded
    pump(&mut app, &mut rx, 2).await;

    assert!(!app.modal.is_open());
    assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    assert_eq!(app.models.models.len(), 1);
    assert_eq!(app.models.models[0].model_id, "aio_gpt4o");
    assert_eq!(app.models.models[0].ass_model_ids, vec!["aio_a".to_string()]);
}

#[tokio::test]
async fn stale_association_universe_is_ignored() {
    let api = Arc::new(MockRegistryApi::with_debug_models(&["aio_a"]));
    let (mut app, mut rx, _) = test_app(&api);
    app.current_page = Page::Models;

    content(&mut app, ContentMessage::Add);
    modal(&mut app, ModalMessage::Close);
    content(&mut app, ContentMessage::Add);
    pump(&mut app, &mut rx, 2).await;

    let form = app.modal.model_form_mut().unwrap();
    assert_eq!(form.serial, 2);
    assert!(matches!(form.association, AssociationField::Ready(_)));
}

#[tokio::test]
async fn universe_failure_shows_error_state() {
    let api = Arc::new(MockRegistryApi::new());
    api.failing.store(true, Ordering::SeqCst);
    let (mut app, mut rx, _) = test_app(&api);
    app.current_page = Page::Models;

    content(&mut app, ContentMessage::Add);
    pump(&mut app, &mut rx, 1).await;

    let form = app.modal.model_form_mut().unwrap();
    assert!(matches!(form.association, AssociationField::Failed));
}

#[tokio::test]
async fn account_loader_drops_duplicate_triggers() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 3);
    let (mut app, mut rx, _) = test_app(&api);

    load_accounts(&mut app, 1);
    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(api.calls("list_accounts"), 1);
    assert_eq!(app.accounts.accounts.len(), 3);
    assert!(!app.accounts.loading);
}

#[tokio::test]
async fn account_pages_follow_server_pagination() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 25);
    let (mut app, mut rx, _) = test_app(&api);

    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.accounts.pagination.total_pages, 3);

    content(&mut app, ContentMessage::NextPage);
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.accounts.current_page(), 2);
    assert_eq!(app.accounts.accounts[0].name, "acc-11");

    content(&mut app, ContentMessage::PrevPage);
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.accounts.current_page(), 1);
}

#[tokio::test]
async fn debounced_search_reloads_first_page_once() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 12);
    let (mut app, mut rx, _) = test_app(&api);

    content(&mut app, ContentMessage::FocusSearch);
    for c in "acc-1".chars() {
        content(&mut app, ContentMessage::Input(c));
    }
    tick(&mut app, Instant::now());
    assert_eq!(api.calls("list_accounts"), 0);

    tick(&mut app, Instant::now() + Duration::from_millis(1100));
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(api.calls("list_accounts"), 1);
    assert_eq!(app.accounts.search.applied, "acc-1");
    // acc-1, acc-10, acc-11, acc-12
    assert_eq!(app.accounts.pagination.total_items, 4);

    tick(&mut app, Instant::now() + Duration::from_millis(2200));
    assert_eq!(api.calls("list_accounts"), 1);
}

#[tokio::test]
async fn toggled_account_comes_from_reload_not_local_patch() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 1);
    let (mut app, mut rx, _) = test_app(&api);
    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;

    // 服务端记录仍是禁用状态，返回值声称已启用
    let returned = Account {
        enabled: true,
        ..app.accounts.accounts[0].clone()
    };
    update(&mut app, AppMessage::Api(ApiEvent::AccountToggled(Ok(returned))));

    assert!(!app.accounts.accounts[0].enabled);
    assert!(app.accounts.loading);
    assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);

    pump(&mut app, &mut rx, 1).await;
    assert_eq!(api.calls("list_accounts"), 2);
    assert!(!app.accounts.accounts[0].enabled);
}

#[tokio::test]
async fn toggling_account_reports_new_state() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 1);
    let (mut app, mut rx, _) = test_app(&api);
    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;

    content(&mut app, ContentMessage::Toggle);
    pump(&mut app, &mut rx, 2).await;

    assert_eq!(
        app.toast.as_ref().unwrap().message,
        "Account Enable successfully!"
    );
    assert!(app.accounts.accounts[0].enabled);
}

#[tokio::test]
async fn edit_account_failure_closes_form() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 1);
    let (mut app, mut rx, _) = test_app(&api);
    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;

    api.accounts.lock().unwrap().clear();
    content(&mut app, ContentMessage::Edit);
    assert!(app.modal.is_open());
    pump(&mut app, &mut rx, 1).await;

    assert!(!app.modal.is_open());
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.message.contains("Account not found"));
}

#[tokio::test]
async fn created_account_returns_to_first_page() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 15);
    let (mut app, mut rx, _) = test_app(&api);
    load_accounts(&mut app, 2);
    pump(&mut app, &mut rx, 1).await;

    content(&mut app, ContentMessage::Add);
    type_text(&mut app, "fresh");
    modal(&mut app, ModalMessage::NextField);
    type_text(&mut app, "https://fresh.example");
    modal(&mut app, ModalMessage::Confirm);
    pump(&mut app, &mut rx, 2).await;

    assert!(!app.modal.is_open());
    assert_eq!(app.accounts.current_page(), 1);
    assert_eq!(app.accounts.pagination.total_items, 16);
}

#[tokio::test]
async fn delete_needs_explicit_confirmation() {
    let api = Arc::new(MockRegistryApi::new());
    *api.models.lock().unwrap() = vec![Model {
        id: 9,
        model_id: "aio_x".into(),
        ..Model::default()
    }];
    let (mut app, mut rx, _) = test_app(&api);
    app.current_page = Page::Models;
    super::load_models(&mut app);
    pump(&mut app, &mut rx, 1).await;

    content(&mut app, ContentMessage::Delete);
    modal(&mut app, ModalMessage::Confirm);
    assert_eq!(api.calls("delete_model"), 0);

    content(&mut app, ContentMessage::Delete);
    modal(&mut app, ModalMessage::ToggleDeleteFocus);
    modal(&mut app, ModalMessage::Confirm);
    pump(&mut app, &mut rx, 2).await;

    assert_eq!(api.calls("delete_model"), 1);
    assert!(app.models.models.is_empty());
}

#[tokio::test]
async fn read_failure_degrades_to_empty_list() {
    let api = Arc::new(MockRegistryApi::new());
    seed_accounts(&api, 3);
    let (mut app, mut rx, _) = test_app(&api);
    load_accounts(&mut app, 1);
    pump(&mut app, &mut rx, 1).await;

    api.failing.store(true, Ordering::SeqCst);
    update(&mut app, AppMessage::Refresh);
    pump(&mut app, &mut rx, 1).await;

    assert!(app.accounts.accounts.is_empty());
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.message.starts_with("Load failed"));
}

#[tokio::test]
async fn cache_reload_waits_then_refetches() {
    let api = Arc::new(MockRegistryApi::with_debug_models(&["aio_a"]));
    let (mut app, mut rx, _) = test_app(&api);
    app.focus = FocusPanel::Navigation;
    app.navigation.selected = 2;
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
    assert_eq!(app.current_page, Page::Debug);
    pump(&mut app, &mut rx, 1).await;

    content(&mut app, ContentMessage::ReloadCache);
    content(&mut app, ContentMessage::ReloadCache);
    assert!(app.debug.refreshing);

    // 触发 → 等待结束 → 重新拉取
    pump(&mut app, &mut rx, 3).await;
    assert_eq!(api.calls("reload_debug_models"), 1);
    assert_eq!(api.calls("debug_models"), 2);
    assert!(!app.debug.refreshing);
    assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Info);
}

#[tokio::test]
async fn language_switch_persists_and_requests_reload() {
    let api = Arc::new(MockRegistryApi::new());
    let (mut app, _rx, store) = test_app(&api);
    app.current_page = Page::Settings;
    app.settings.selected_index = 1;

    content(&mut app, ContentMessage::ToggleNext);

    assert!(app.reload_requested);
    let saved = store.load().unwrap();
    assert_eq!(saved.language.as_deref(), Some("zh"));
    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn go_back_unwinds_one_layer_at_a_time() {
    let api = Arc::new(MockRegistryApi::new());
    let (mut app, _rx, _) = test_app(&api);

    content(&mut app, ContentMessage::FocusSearch);
    update(&mut app, AppMessage::ShowHelp);

    update(&mut app, AppMessage::GoBack);
    assert!(!app.modal.is_open());
    assert!(app.accounts.search.editing);

    update(&mut app, AppMessage::GoBack);
    assert!(!app.accounts.search.editing);
    assert!(app.focus.is_content());

    update(&mut app, AppMessage::GoBack);
    assert!(app.focus.is_navigation());
}
