//! Registry REST API
//!
//! [`RegistryApi`] is the seam between the console and the backend. The
//! console only talks to this trait; [`HttpRegistryApi`] is the production
//! implementation over reqwest.

mod http;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Account, AccountPage, AccountPayload, DebugModel, Model, ModelPayload};

pub use http::HttpRegistryApi;

/// Operations offered by the registry backend.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// `GET /api/accounts?page=&page_size=&search=`
    async fn list_accounts(&self, page: u32, page_size: u32, search: &str)
        -> CoreResult<AccountPage>;

    /// `GET /api/accounts/:id`
    async fn get_account(&self, id: i64) -> CoreResult<Account>;

    /// `POST /api/accounts`, succeeds only with 201
    async fn create_account(&self, payload: &AccountPayload) -> CoreResult<()>;

    /// `PUT /api/accounts/:id`
    async fn update_account(&self, id: i64, payload: &AccountPayload) -> CoreResult<()>;

    /// `PATCH /api/accounts/:id`, returns the account with its new state
    async fn toggle_account(&self, id: i64) -> CoreResult<Account>;

    /// `DELETE /api/accounts/:id`, succeeds only with 204
    async fn delete_account(&self, id: i64) -> CoreResult<()>;

    /// `GET /api/models`, or `GET /api/models/search?search=` when `search` is not empty
    async fn list_models(&self, search: &str) -> CoreResult<Vec<Model>>;

    /// `POST /api/models`
    async fn create_model(&self, payload: &ModelPayload) -> CoreResult<()>;

    /// `PUT /api/models/:id`
    async fn update_model(&self, id: i64, payload: &ModelPayload) -> CoreResult<()>;

    /// `PATCH /api/models/:id`
    async fn toggle_model(&self, id: i64) -> CoreResult<()>;

    /// `DELETE /api/models/:id`
    async fn delete_model(&self, id: i64) -> CoreResult<()>;

    /// `GET /api/debug/models`
    async fn debug_models(&self) -> CoreResult<Vec<DebugModel>>;

    /// `POST /api/debug/models/reload`
    async fn reload_debug_models(&self) -> CoreResult<()>;
}
