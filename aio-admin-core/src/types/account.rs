//! Account related types

use serde::{Deserialize, Serialize};

/// Credential/endpoint record served by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ext: String,
    /// Epoch milliseconds, 0 when never updated
    #[serde(default)]
    pub updated_at: i64,
}

/// Body of `POST /api/accounts` and `PUT /api/accounts/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPayload {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
    pub ext: String,
    pub enabled: bool,
}

/// Normalized page of accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPage {
    pub accounts: Vec<Account>,
    pub total: u32,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
    pub search: String,
}

/// Raw payload of `GET /api/accounts`.
///
/// Older backends answer with a bare array, newer ones with a paged object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountPageResponse {
    Paged {
        #[serde(default)]
        accounts: Vec<Account>,
        #[serde(default)]
        total: u32,
        #[serde(default)]
        total_pages: u32,
        #[serde(default)]
        page: u32,
        #[serde(default)]
        page_size: u32,
        #[serde(default)]
        search: String,
    },
    Bare(Vec<Account>),
}

impl AccountPageResponse {
    /// Fill missing or zero fields from the request parameters.
    pub fn into_page(self, requested_page: u32, requested_size: u32) -> AccountPage {
        match self {
            Self::Paged {
                accounts,
                total,
                total_pages,
                page,
                page_size,
                search,
            } => AccountPage {
                accounts,
                total,
                total_pages: total_pages.max(1),
                page: if page == 0 { requested_page.max(1) } else { page },
                page_size: if page_size == 0 {
                    requested_size
                } else {
                    page_size
                },
                search,
            },
            Self::Bare(accounts) => {
                let total = u32::try_from(accounts.len()).unwrap_or(u32::MAX);
                AccountPage {
                    accounts,
                    total,
                    total_pages: 1,
                    page: 1,
                    page_size: requested_size,
                    search: String::new(),
                }
            }
        }
    }
}
