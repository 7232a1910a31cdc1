//! Translation layer
//!
//! Two locale bundles (`en`, `zh`) are registered into a [`TranslationRegistry`].
//! Only once both are present does the registry hand out a [`Translator`];
//! there is no partially initialized state to observe.
//!
//! Lookups use dotted paths (`"accounts.title"`) into the bundle of the
//! current locale. A missing key is logged and returned verbatim, so a typo
//! shows up on screen instead of failing.

mod template;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

pub use template::substitute;

const EN_BUNDLE: &str = include_str!("../../locales/en.json");
const ZH_BUNDLE: &str = include_str!("../../locales/zh.json");

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh]
    }

    /// Persisted language code
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Resolve a persisted preference, falling back to the default locale.
    pub fn resolve(preference: Option<&str>) -> Self {
        preference.and_then(Self::from_code).unwrap_or_default()
    }

    /// Name shown in the language switcher (always in its own language)
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "简体中文",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

/// Collects locale bundles until every supported locale is present.
#[derive(Debug, Default)]
pub struct TranslationRegistry {
    bundles: HashMap<Locale, Value>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the bundles compiled into the binary.
    pub fn builtin() -> CoreResult<Self> {
        let mut registry = Self::new();
        registry.add_translation(Locale::En, parse_bundle(Locale::En, EN_BUNDLE)?);
        registry.add_translation(Locale::Zh, parse_bundle(Locale::Zh, ZH_BUNDLE)?);
        Ok(registry)
    }

    /// Register (or replace) the bundle of one locale. Order does not matter.
    pub fn add_translation(&mut self, locale: Locale, bundle: Value) -> &mut Self {
        log::debug!("Registered translation bundle: {}", locale.code());
        self.bundles.insert(locale, bundle);
        self
    }

    /// Whether every supported locale has registered.
    pub fn is_ready(&self) -> bool {
        Locale::all().iter().all(|l| self.bundles.contains_key(l))
    }

    /// Finish registration and resolve the persisted locale preference.
    pub fn into_translator(self, preference: Option<&str>) -> CoreResult<Translator> {
        if !self.is_ready() {
            let missing: Vec<&str> = Locale::all()
                .iter()
                .filter(|l| !self.bundles.contains_key(l))
                .map(|l| l.code())
                .collect();
            return Err(CoreError::Config(format!(
                "missing translation bundles: {}",
                missing.join(", ")
            )));
        }

        let locale = Locale::resolve(preference);
        log::info!("Translation layer ready, locale: {}", locale.code());
        Ok(Translator {
            bundles: Arc::new(self.bundles),
            locale,
        })
    }
}

fn parse_bundle(locale: Locale, raw: &str) -> CoreResult<Value> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        CoreError::Config(format!("invalid {} bundle: {e}", locale.code()))
    })?;
    if !value.is_object() {
        return Err(CoreError::Config(format!(
            "{} bundle must be a JSON object",
            locale.code()
        )));
    }
    Ok(value)
}

/// Ready translation layer bound to one locale.
#[derive(Debug, Clone)]
pub struct Translator {
    bundles: Arc<HashMap<Locale, Value>>,
    locale: Locale,
}

impl Translator {
    /// Translator over the builtin bundles.
    pub fn builtin(preference: Option<&str>) -> CoreResult<Self> {
        TranslationRegistry::builtin()?.into_translator(preference)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same bundles, different locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            bundles: Arc::clone(&self.bundles),
            locale,
        }
    }

    /// Look up `key` without parameters.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Look up `key` and substitute `${name}` placeholders from `params`.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(template) => substitute(template, params),
            None => {
                log::warn!(
                    "Translation key not found: {key} (locale: {})",
                    self.locale.code()
                );
                key.to_string()
            }
        }
    }

    /// Whether `key` resolves to a string in the current locale.
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = self.bundles.get(&self.locale)?;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        if let Some(map) = value.as_object() {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                collect_keys(&path, v, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn not_ready_until_both_locales_registered() {
        let mut registry = TranslationRegistry::new();
        registry.add_translation(Locale::Zh, json!({"a": "甲"}));
        assert!(!registry.is_ready());
        registry.add_translation(Locale::En, json!({"a": "A"}));
        assert!(registry.is_ready());
    }

    #[test]
    fn incomplete_registry_is_rejected() {
        let mut registry = TranslationRegistry::new();
        registry.add_translation(Locale::En, json!({}));
        let err = registry.into_translator(None).unwrap_err();
        assert!(err.to_string().contains("zh"));
    }

    #[test]
    fn unknown_preference_falls_back_to_default() {
        let tr = Translator::builtin(Some("fr")).unwrap();
        assert_eq!(tr.locale(), Locale::En);
        let tr = Translator::builtin(None).unwrap();
        assert_eq!(tr.locale(), Locale::En);
        let tr = Translator::builtin(Some("zh")).unwrap();
        assert_eq!(tr.locale(), Locale::Zh);
    }

    #[test]
    fn dotted_lookup_and_params() {
        let tr = Translator::builtin(Some("en")).unwrap();
        assert_eq!(tr.t("nav.accounts"), "Accounts");
        assert_eq!(
            tr.t_with("time.minutesAgo", &[("minutes", "5")]),
            "5 minutes ago"
        );
        let zh = tr.with_locale(Locale::Zh);
        assert_eq!(zh.t_with("time.minutesAgo", &[("minutes", "5")]), "5分钟前");
    }

    #[test]
    fn missing_key_returns_key() {
        let tr = Translator::builtin(None).unwrap();
        for key in ["", "nope", "nav", "nav.accounts.deeper", "a..b", "${x}"] {
            assert_eq!(tr.t(key), key);
            assert_eq!(tr.with_locale(Locale::Zh).t(key), key);
        }
    }

    #[test]
    fn bundles_share_the_same_keys() {
        let en: Value = serde_json::from_str(EN_BUNDLE).unwrap();
        let zh: Value = serde_json::from_str(ZH_BUNDLE).unwrap();
        let (mut en_keys, mut zh_keys) = (Vec::new(), Vec::new());
        collect_keys("", &en, &mut en_keys);
        collect_keys("", &zh, &mut zh_keys);
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn validation_keys_exist() {
        use crate::error::ValidationError;
        let tr = Translator::builtin(None).unwrap();
        for v in [
            ValidationError::ModelIdRequired,
            ValidationError::ModelIdTooLong,
            ValidationError::ModelIdInvalidChars,
            ValidationError::ModelIdInvalidFormat,
            ValidationError::AssociationRequired,
            ValidationError::AssociationConflict,
            ValidationError::CustomValueRequired,
            ValidationError::NameRequired,
            ValidationError::BaseUrlScheme,
        ] {
            assert!(tr.has(v.message_key()), "{}", v.message_key());
        }
    }
}
