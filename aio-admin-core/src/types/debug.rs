//! Debug listing types

use serde::{Deserialize, Serialize};

use super::Account;

/// One cached model and the accounts able to serve it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugModel {
    pub id: String,
    #[serde(default)]
    pub account_list: Vec<Account>,
}

/// Envelope of `GET /api/debug/models`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebugModelsResponse {
    #[serde(default)]
    pub data: Vec<DebugModel>,
}
