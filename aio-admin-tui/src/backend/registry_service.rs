//! 注册中心服务
//!
//! 把每个 API 调用放到 tokio 运行时上执行，
//! 完成后通过通道把结果作为 `AppMessage::Api` 发回主循环。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use aio_admin_core::api::RegistryApi;
use aio_admin_core::types::{AccountPayload, ModelPayload};
use aio_admin_core::CoreResult;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{ApiEvent, AppMessage};

/// 触发缓存刷新后等待多久再重新拉取
pub const RELOAD_WAIT: Duration = Duration::from_millis(1000);

/// 后端服务句柄
#[derive(Clone)]
pub struct RegistryService {
    api: Arc<dyn RegistryApi>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

/// 记录失败的请求：预期内的错误用 warn，其余用 error
fn log_failure<T>(label: &str, result: &CoreResult<T>) {
    if let Err(e) = result {
        if e.is_expected() {
            log::warn!("{label} failed: {e}");
        } else {
            log::error!("{label} failed: {e}");
        }
    }
}

impl RegistryService {
    pub fn new(api: Arc<dyn RegistryApi>, runtime: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self { api, runtime, tx }
    }

    /// 在运行时上执行请求，并把结果发回主循环
    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Arc<dyn RegistryApi>) -> Fut + Send + 'static,
        Fut: Future<Output = ApiEvent> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let event = task(api).await;
            // 主循环已退出时接收端被丢弃，忽略即可
            let _ = tx.send(AppMessage::Api(event));
        });
    }

    pub fn load_accounts(&self, page: u32, page_size: u32, search: String) {
        self.spawn(move |api| async move {
            let result = api.list_accounts(page, page_size, &search).await;
            log_failure("load accounts", &result);
            ApiEvent::AccountsLoaded(result)
        });
    }

    pub fn fetch_account(&self, id: i64) {
        self.spawn(move |api| async move {
            let result = api.get_account(id).await;
            log_failure("fetch account", &result);
            ApiEvent::AccountFetched(result)
        });
    }

    pub fn create_account(&self, payload: AccountPayload) {
        self.spawn(move |api| async move {
            let result = api.create_account(&payload).await;
            log_failure("create account", &result);
            ApiEvent::AccountCreated(result)
        });
    }

    pub fn update_account(&self, id: i64, payload: AccountPayload) {
        self.spawn(move |api| async move {
            let result = api.update_account(id, &payload).await;
            log_failure("update account", &result);
            ApiEvent::AccountUpdated(result)
        });
    }

    pub fn toggle_account(&self, id: i64) {
        self.spawn(move |api| async move {
            let result = api.toggle_account(id).await;
            log_failure("toggle account", &result);
            ApiEvent::AccountToggled(result)
        });
    }

    pub fn delete_account(&self, id: i64) {
        self.spawn(move |api| async move {
            let result = api.delete_account(id).await;
            log_failure("delete account", &result);
            ApiEvent::AccountDeleted(result)
        });
    }

    pub fn load_models(&self, search: String) {
        self.spawn(move |api| async move {
            let result = api.list_models(&search).await;
            log_failure("load models", &result);
            ApiEvent::ModelsLoaded(result)
        });
    }

    /// 有 ID 时更新，否则创建
    pub fn save_model(&self, id: Option<i64>, payload: ModelPayload) {
        self.spawn(move |api| async move {
            let result = match id {
                Some(id) => api.update_model(id, &payload).await,
                None => api.create_model(&payload).await,
            };
            log_failure("save model", &result);
            ApiEvent::ModelSaved {
                is_update: id.is_some(),
                result,
            }
        });
    }

    pub fn toggle_model(&self, id: i64) {
        self.spawn(move |api| async move {
            let result = api.toggle_model(id).await;
            log_failure("toggle model", &result);
            ApiEvent::ModelToggled(result)
        });
    }

    pub fn delete_model(&self, id: i64) {
        self.spawn(move |api| async move {
            let result = api.delete_model(id).await;
            log_failure("delete model", &result);
            ApiEvent::ModelDeleted(result)
        });
    }

    /// 为序号为 `serial` 的模型表单拉取关联模型全集
    pub fn load_association_universe(&self, serial: u64) {
        self.spawn(move |api| async move {
            let result = api.debug_models().await;
            log_failure("load association universe", &result);
            ApiEvent::AssociationUniverseLoaded { serial, result }
        });
    }

    pub fn load_debug_models(&self) {
        self.spawn(|api| async move {
            let result = api.debug_models().await;
            log_failure("load debug models", &result);
            ApiEvent::DebugModelsLoaded(result)
        });
    }

    pub fn reload_debug_cache(&self) {
        self.spawn(|api| async move {
            let result = api.reload_debug_models().await;
            log_failure("reload debug cache", &result);
            ApiEvent::DebugReloadTriggered(result)
        });
    }

    /// 等待服务端重建缓存
    pub fn wait_for_cache(&self) {
        self.spawn(|_| async move {
            tokio::time::sleep(RELOAD_WAIT).await;
            ApiEvent::DebugReloadWaitElapsed
        });
    }
}
