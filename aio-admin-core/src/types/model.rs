//! Model related types

use serde::{Deserialize, Serialize};

/// Upstream protocol family of a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    #[default]
    Chat,
    Claude,
    Codex,
    Gemini,
}

impl ModelProvider {
    pub fn all() -> &'static [ModelProvider] {
        &[Self::Chat, Self::Claude, Self::Codex, Self::Gemini]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Gemini => "gemini",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Chat => Self::Claude,
            Self::Claude => Self::Codex,
            Self::Codex => Self::Gemini,
            Self::Gemini => Self::Chat,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Chat => Self::Gemini,
            Self::Claude => Self::Chat,
            Self::Codex => Self::Claude,
            Self::Gemini => Self::Codex,
        }
    }
}

/// Logical model identifier and its associations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub model_id: String,
    #[serde(default)]
    pub provider: ModelProvider,
    #[serde(default)]
    pub ass_model_ids: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    /// Epoch milliseconds
    #[serde(default)]
    pub updated_at: i64,
}

/// Body of `POST /api/models` and `PUT /api/models/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPayload {
    pub model_id: String,
    pub ass_model_ids: Vec<String>,
    pub provider: ModelProvider,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModelProvider::Claude).unwrap(),
            "\"claude\""
        );
    }

    #[test]
    fn provider_cycle_visits_all() {
        let mut p = ModelProvider::Chat;
        for _ in 0..ModelProvider::all().len() {
            assert_eq!(p.next().prev(), p);
            p = p.next();
        }
        assert_eq!(p, ModelProvider::Chat);
    }

    #[test]
    fn model_without_optional_fields() {
        let m: Model = serde_json::from_str(r#"{"id":7,"model_id":"aio_x"}"#).unwrap();
        assert_eq!(m.provider, ModelProvider::Chat);
        assert!(m.ass_model_ids.is_empty());
    }
}
