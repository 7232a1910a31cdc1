//! 内存中的注册中心（测试用）

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use aio_admin_core::api::RegistryApi;
use aio_admin_core::i18n::Translator;
use aio_admin_core::pagination::{page_count, page_slice};
use aio_admin_core::types::{
    Account, AccountPage, AccountPayload, DebugModel, Model, ModelPayload,
};
use aio_admin_core::{CoreError, CoreResult};
use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::{AppConfig, ConfigError, ConfigService, RegistryService};
use crate::message::AppMessage;
use crate::model::App;

/// 记录调用次数的内存注册中心
#[derive(Default)]
pub struct MockRegistryApi {
    pub accounts: Mutex<Vec<Account>>,
    pub models: Mutex<Vec<Model>>,
    pub debug: Mutex<Vec<DebugModel>>,
    /// 置位后所有请求都返回 500
    pub failing: AtomicBool,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl MockRegistryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_models(ids: &[&str]) -> Self {
        let mock = Self::new();
        *mock.debug.lock().unwrap() = ids
            .iter()
            .map(|id| DebugModel {
                id: (*id).to_string(),
                account_list: vec![Account {
                    id: 1,
                    name: format!("{id}-account"),
                    ..Account::default()
                }],
            })
            .collect();
        mock
    }

    /// 某个方法被调用的次数
    pub fn calls(&self, name: &str) -> usize {
        self.calls.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    /// 所有方法的调用总数
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, name: &'static str) -> CoreResult<()> {
        *self.calls.lock().unwrap().entry(name).or_insert(0) += 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::Http {
                status: 500,
                message: "backend unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RegistryApi for MockRegistryApi {
    async fn list_accounts(
        &self,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> CoreResult<AccountPage> {
        self.record("list_accounts")?;
        let matching: Vec<Account> = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.name.contains(search))
            .cloned()
            .collect();
        let total = u32::try_from(matching.len()).unwrap();
        Ok(AccountPage {
            accounts: page_slice(&matching, page, page_size).to_vec(),
            total,
            total_pages: page_count(total, page_size),
            page,
            page_size,
            search: search.to_string(),
        })
    }

    async fn get_account(&self, id: i64) -> CoreResult<Account> {
        self.record("get_account")?;
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(CoreError::Http {
                status: 404,
                message: "Account not found".into(),
            })
    }

    async fn create_account(&self, payload: &AccountPayload) -> CoreResult<()> {
        self.record("create_account")?;
        let mut accounts = self.accounts.lock().unwrap();
        let id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        accounts.push(Account {
            id,
            name: payload.name.clone(),
            base_url: payload.base_url.clone(),
            api_key: payload.api_key.clone(),
            enabled: payload.enabled,
            ext: payload.ext.clone(),
            updated_at: 0,
        });
        Ok(())
    }

    async fn update_account(&self, id: i64, payload: &AccountPayload) -> CoreResult<()> {
        self.record("update_account")?;
        if let Some(account) = self.accounts.lock().unwrap().iter_mut().find(|a| a.id == id) {
            account.base_url = payload.base_url.clone();
            account.api_key = payload.api_key.clone();
            account.ext = payload.ext.clone();
            account.enabled = payload.enabled;
        }
        Ok(())
    }

    async fn toggle_account(&self, id: i64) -> CoreResult<Account> {
        self.record("toggle_account")?;
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts.iter_mut().find(|a| a.id == id).unwrap();
        account.enabled = !account.enabled;
        Ok(account.clone())
    }

    async fn delete_account(&self, id: i64) -> CoreResult<()> {
        self.record("delete_account")?;
        self.accounts.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_models(&self, search: &str) -> CoreResult<Vec<Model>> {
        self.record("list_models")?;
        Ok(self
            .models
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.model_id.contains(search))
            .cloned()
            .collect())
    }

    async fn create_model(&self, payload: &ModelPayload) -> CoreResult<()> {
        self.record("create_model")?;
        let mut models = self.models.lock().unwrap();
        let id = models.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        models.push(Model {
            id,
            model_id: payload.model_id.clone(),
            provider: payload.provider,
            ass_model_ids: payload.ass_model_ids.clone(),
            enabled: payload.enabled,
            updated_at: 0,
        });
        Ok(())
    }

    async fn update_model(&self, id: i64, payload: &ModelPayload) -> CoreResult<()> {
        self.record("update_model")?;
        if let Some(model) = self.models.lock().unwrap().iter_mut().find(|m| m.id == id) {
            model.provider = payload.provider;
            model.ass_model_ids = payload.ass_model_ids.clone();
            model.enabled = payload.enabled;
        }
        Ok(())
    }

    async fn toggle_model(&self, id: i64) -> CoreResult<()> {
        self.record("toggle_model")?;
        if let Some(model) = self.models.lock().unwrap().iter_mut().find(|m| m.id == id) {
            model.enabled = !model.enabled;
        }
        Ok(())
    }

    async fn delete_model(&self, id: i64) -> CoreResult<()> {
        self.record("delete_model")?;
        self.models.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn debug_models(&self) -> CoreResult<Vec<DebugModel>> {
        self.record("debug_models")?;
        Ok(self.debug.lock().unwrap().clone())
    }

    async fn reload_debug_models(&self) -> CoreResult<()> {
        self.record("reload_debug_models")
    }
}

/// 内存配置存储
#[derive(Default)]
pub struct MemoryConfig {
    saved: Mutex<Option<AppConfig>>,
}

impl ConfigService for MemoryConfig {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        *self.saved.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

/// 在当前 tokio 运行时上组装一个使用 Mock 后端的英文 App
pub fn test_app(
    api: &Arc<MockRegistryApi>,
) -> (App, UnboundedReceiver<AppMessage>, Arc<MemoryConfig>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let backend = RegistryService::new(api.clone(), Handle::current(), tx);
    let store = Arc::new(MemoryConfig::default());
    let i18n = Translator::builtin(Some("en")).unwrap();
    let app = App::new(AppConfig::default(), store.clone(), i18n, backend);
    (app, rx, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginates_and_counts_calls() {
        let mock = MockRegistryApi::new();
        for i in 0..12 {
            tokio_test::block_on(mock.create_account(&AccountPayload {
                name: format!("acc-{i}"),
                base_url: "http://x".into(),
                ..AccountPayload::default()
            }))
            .unwrap();
        }
        let page = tokio_test::block_on(mock.list_accounts(2, 10, "")).unwrap();
        assert_eq!(page.accounts.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(mock.calls("create_account"), 12);
        assert_eq!(mock.total_calls(), 13);
    }

    #[test]
    fn failing_mode_returns_server_error() {
        let mock = MockRegistryApi::new();
        mock.failing.store(true, Ordering::SeqCst);
        let err = tokio_test::block_on(mock.debug_models()).unwrap_err();
        assert!(!err.is_expected());
    }
}
