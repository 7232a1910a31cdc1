//! reqwest implementation of [`RegistryApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::RegistryApi;
use crate::error::{CoreError, CoreResult};
use crate::types::{
    Account, AccountPage, AccountPageResponse, AccountPayload, DebugModel, DebugModelsResponse,
    Model, ModelPayload,
};
use crate::utils::log_sanitizer::truncate_for_log;

/// Error envelope of non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Status codes a call accepts as success.
#[derive(Debug, Clone, Copy)]
enum Expect {
    AnySuccess,
    Exactly(u16),
}

impl Expect {
    fn accepts(self, status: u16) -> bool {
        match self {
            Self::AnySuccess => (200..300).contains(&status),
            Self::Exactly(code) => status == code,
        }
    }
}

/// HTTP client for the registry backend.
pub struct HttpRegistryApi {
    client: Client,
    base_url: String,
}

impl HttpRegistryApi {
    /// Create a client for `base_url` (scheme and host, optionally a path prefix).
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let parsed = url::Url::parse(base_url.trim())
            .map_err(|e| CoreError::Config(format!("invalid api base url '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "api base url must use http or https: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and return the body of an accepted response.
    async fn execute(&self, builder: RequestBuilder, label: &str, expect: Expect) -> CoreResult<String> {
        log::debug!("[registry] {label}");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(format!("{label}: {e}"))
            } else {
                CoreError::Network(format!("{label}: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[registry] {label} -> {status}");

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("failed to read response body: {e}")))?;

        if !expect.accepts(status) {
            let err = http_error(status, &body);
            if err.is_expected() {
                log::warn!("[registry] {label} rejected: {err}");
            } else {
                log::error!("[registry] {label} failed: {err}");
            }
            return Err(err);
        }

        log::debug!("[registry] Response body: {}", truncate_for_log(&body));
        Ok(body)
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expect: Expect,
    ) -> CoreResult<String> {
        let label = format!("{method} {path}");
        let builder = self.request(method, path).json(body);
        self.execute(builder, &label, expect).await
    }

    async fn send_empty(&self, method: Method, path: &str, expect: Expect) -> CoreResult<String> {
        let label = format!("{method} {path}");
        let builder = self.request(method, path);
        self.execute(builder, &label, expect).await
    }
}

/// Map a rejected response to [`CoreError::Http`], preferring the `{error}` text.
fn http_error(status: u16, body: &str) -> CoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"));
    CoreError::Http { status, message }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> CoreResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[registry] JSON parse failed: {e}");
        log::error!("[registry] Raw response: {}", truncate_for_log(body));
        CoreError::Parse(e.to_string())
    })
}

fn accounts_path(page: u32, page_size: u32, search: &str) -> String {
    let mut path = format!("/api/accounts?page={page}&page_size={page_size}");
    if !search.is_empty() {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(search));
    }
    path
}

fn models_path(search: &str) -> String {
    if search.is_empty() {
        "/api/models".to_string()
    } else {
        format!("/api/models/search?search={}", urlencoding::encode(search))
    }
}

#[async_trait]
impl RegistryApi for HttpRegistryApi {
    async fn list_accounts(
        &self,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> CoreResult<AccountPage> {
        let path = accounts_path(page, page_size, search);
        let body = self.send_empty(Method::GET, &path, Expect::AnySuccess).await?;
        let response: AccountPageResponse = parse_json(&body)?;
        Ok(response.into_page(page, page_size))
    }

    async fn get_account(&self, id: i64) -> CoreResult<Account> {
        let path = format!("/api/accounts/{id}");
        let body = self.send_empty(Method::GET, &path, Expect::AnySuccess).await?;
        parse_json(&body)
    }

    async fn create_account(&self, payload: &AccountPayload) -> CoreResult<()> {
        self.send_json(Method::POST, "/api/accounts", payload, Expect::Exactly(201))
            .await?;
        Ok(())
    }

    async fn update_account(&self, id: i64, payload: &AccountPayload) -> CoreResult<()> {
        let path = format!("/api/accounts/{id}");
        self.send_json(Method::PUT, &path, payload, Expect::AnySuccess)
            .await?;
        Ok(())
    }

    async fn toggle_account(&self, id: i64) -> CoreResult<Account> {
        let path = format!("/api/accounts/{id}");
        let body = self.send_empty(Method::PATCH, &path, Expect::AnySuccess).await?;
        parse_json(&body)
    }

    async fn delete_account(&self, id: i64) -> CoreResult<()> {
        let path = format!("/api/accounts/{id}");
        self.send_empty(Method::DELETE, &path, Expect::Exactly(204))
            .await?;
        Ok(())
    }

    async fn list_models(&self, search: &str) -> CoreResult<Vec<Model>> {
        let body = self
            .send_empty(Method::GET, &models_path(search), Expect::AnySuccess)
            .await?;
        // A non-array body counts as an empty list
        let value: serde_json::Value = parse_json(&body)?;
        if value.is_array() {
            serde_json::from_value(value).map_err(|e| CoreError::Parse(e.to_string()))
        } else {
            log::warn!("[registry] Model list is not an array, treating as empty");
            Ok(Vec::new())
        }
    }

    async fn create_model(&self, payload: &ModelPayload) -> CoreResult<()> {
        self.send_json(Method::POST, "/api/models", payload, Expect::AnySuccess)
            .await?;
        Ok(())
    }

    async fn update_model(&self, id: i64, payload: &ModelPayload) -> CoreResult<()> {
        let path = format!("/api/models/{id}");
        self.send_json(Method::PUT, &path, payload, Expect::AnySuccess)
            .await?;
        Ok(())
    }

    async fn toggle_model(&self, id: i64) -> CoreResult<()> {
        let path = format!("/api/models/{id}");
        self.send_empty(Method::PATCH, &path, Expect::AnySuccess)
            .await?;
        Ok(())
    }

    async fn delete_model(&self, id: i64) -> CoreResult<()> {
        let path = format!("/api/models/{id}");
        self.send_empty(Method::DELETE, &path, Expect::AnySuccess)
            .await?;
        Ok(())
    }

    async fn debug_models(&self) -> CoreResult<Vec<DebugModel>> {
        let body = self
            .send_empty(Method::GET, "/api/debug/models", Expect::AnySuccess)
            .await?;
        let response: DebugModelsResponse = parse_json(&body)?;
        Ok(response.data)
    }

    async fn reload_debug_models(&self) -> CoreResult<()> {
        self.send_empty(Method::POST, "/api/debug/models/reload", Expect::AnySuccess)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_used() {
        let err = http_error(400, r#"{"error":"name already exists"}"#);
        assert!(matches!(
            err,
            CoreError::Http { status: 400, ref message } if message == "name already exists"
        ));
    }

    #[test]
    fn missing_error_body_falls_back_to_status() {
        for body in ["", "<html>", r#"{"error":""}"#, r#"{"other":1}"#] {
            let err = http_error(502, body);
            assert_eq!(err.user_message(), "HTTP error! status: 502");
        }
    }

    #[test]
    fn search_is_url_encoded() {
        assert_eq!(
            accounts_path(2, 10, "a b&c"),
            "/api/accounts?page=2&page_size=10&search=a%20b%26c"
        );
        assert_eq!(accounts_path(1, 10, ""), "/api/accounts?page=1&page_size=10");
        assert_eq!(models_path(""), "/api/models");
        assert_eq!(models_path("gpt"), "/api/models/search?search=gpt");
    }

    #[test]
    fn expected_status_codes() {
        assert!(Expect::Exactly(201).accepts(201));
        assert!(!Expect::Exactly(201).accepts(200));
        assert!(Expect::AnySuccess.accepts(204));
        assert!(!Expect::AnySuccess.accepts(404));
    }

    #[test]
    fn base_url_validation() {
        let timeout = Duration::from_secs(5);
        let api = HttpRegistryApi::new("http://127.0.0.1:8080/", timeout).unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:8080");
        assert_eq!(api.url("/api/models"), "http://127.0.0.1:8080/api/models");

        let api = HttpRegistryApi::new("https://example.com/admin/", timeout).unwrap();
        assert_eq!(api.url("/api/models"), "https://example.com/admin/api/models");

        assert!(HttpRegistryApi::new("not a url", timeout).is_err());
        assert!(HttpRegistryApi::new("ftp://example.com", timeout).is_err());
    }

    #[test]
    fn parse_error_is_reported() {
        let result: CoreResult<Vec<Model>> = parse_json("{not json");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }
}
