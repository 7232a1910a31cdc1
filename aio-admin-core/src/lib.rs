//! AIO Admin Core
//!
//! Platform-independent logic of the AIO admin console:
//!
//! - [`api`]: the registry REST API trait and its reqwest client
//! - [`types`]: accounts, models and debug listing payloads
//! - [`i18n`]: locale bundles and the [`Translator`](i18n::Translator)
//! - [`association`]: associated-model selection state
//! - [`validation`]: model ID normalization and form checks
//! - [`pagination`]: page selector arithmetic
//! - [`format`]: card display helpers (masked keys, relative times)

pub mod api;
pub mod association;
pub mod error;
pub mod format;
pub mod i18n;
pub mod pagination;
pub mod types;
pub mod utils;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
