//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Client-side validation failures.
///
/// Every variant blocks a submit before any request is sent. The UI shows
/// the translated text behind [`ValidationError::message_key`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// Model ID is empty after trimming
    #[error("model id is required")]
    ModelIdRequired,

    /// Model ID suffix (after the `aio_` prefix) exceeds the length limit
    #[error("model id must be at most 10 characters after the prefix")]
    ModelIdTooLong,

    /// Model ID suffix contains characters outside `[a-z0-9_-]`
    #[error("model id may only contain lowercase letters, digits, '_' and '-'")]
    ModelIdInvalidChars,

    /// Model ID suffix starts or ends with `_` / `-`
    #[error("model id must not start or end with '_' or '-'")]
    ModelIdInvalidFormat,

    /// Neither custom mode nor any known model is selected
    #[error("select at least one associated model or use custom mode")]
    AssociationRequired,

    /// Custom mode and structured selection are both active
    #[error("custom mode cannot be combined with other models")]
    AssociationConflict,

    /// Custom mode is active but the free-text value is empty
    #[error("custom mode requires at least one model id")]
    CustomValueRequired,

    /// Account name is empty on create
    #[error("account name is required")]
    NameRequired,

    /// Base URL does not start with `http://` or `https://`
    #[error("base url must start with http:// or https://")]
    BaseUrlScheme,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::ModelIdRequired => "validation.modelIdRequired",
            Self::ModelIdTooLong => "validation.modelIdTooLong",
            Self::ModelIdInvalidChars => "validation.modelIdInvalidChars",
            Self::ModelIdInvalidFormat => "validation.modelIdInvalidFormat",
            Self::AssociationRequired => "validation.assModelIdsRequired",
            Self::AssociationConflict => "validation.assModelIdsConflict",
            Self::CustomValueRequired => "validation.customModeRequired",
            Self::NameRequired => "validation.nameRequired",
            Self::BaseUrlScheme => "validation.baseURLError",
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Client-side validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx response; `message` comes from the `{error}` body when present
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration (base URL, locale bundle, ...)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected request, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Http { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Message suitable for a toast: the server-provided text for HTTP errors,
    /// the display form otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_expected() {
        let e = CoreError::Http {
            status: 404,
            message: "account not found".into(),
        };
        assert!(e.is_expected());
        assert_eq!(e.user_message(), "account not found");
    }

    #[test]
    fn server_and_transport_errors_are_not_expected() {
        assert!(!CoreError::Http {
            status: 500,
            message: String::new()
        }
        .is_expected());
        assert!(!CoreError::Network("refused".into()).is_expected());
        assert!(!CoreError::Parse("eof".into()).is_expected());
    }

    #[test]
    fn validation_converts_into_core_error() {
        let e: CoreError = ValidationError::ModelIdTooLong.into();
        assert!(e.is_expected());
        assert!(matches!(
            e,
            CoreError::Validation(ValidationError::ModelIdTooLong)
        ));
    }

    #[test]
    fn message_keys_live_under_validation() {
        for v in [
            ValidationError::ModelIdRequired,
            ValidationError::AssociationRequired,
            ValidationError::BaseUrlScheme,
        ] {
            assert!(v.message_key().starts_with("validation."));
        }
    }
}
