//! Client-side form validation

use crate::error::ValidationError;

/// Prefix every model ID carries.
pub const MODEL_ID_PREFIX: &str = "aio_";

/// Maximum number of characters after [`MODEL_ID_PREFIX`].
pub const MODEL_ID_MAX_SUFFIX: usize = 10;

/// Normalize a user-entered model ID.
///
/// The input is trimmed and lowercased, the `aio_` prefix is added when
/// missing, and the part after the prefix must be at most 10 characters of
/// `[a-z0-9_-]` that neither starts nor ends with `_` or `-`.
///
/// Normalizing an already normalized ID returns it unchanged.
pub fn normalize_model_id(raw: &str) -> Result<String, ValidationError> {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ValidationError::ModelIdRequired);
    }

    let suffix = lowered.strip_prefix(MODEL_ID_PREFIX).unwrap_or(&lowered);
    validate_suffix(suffix)?;

    Ok(format!("{MODEL_ID_PREFIX}{suffix}"))
}

fn validate_suffix(suffix: &str) -> Result<(), ValidationError> {
    if suffix.chars().count() > MODEL_ID_MAX_SUFFIX {
        return Err(ValidationError::ModelIdTooLong);
    }

    let charset_ok = !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !charset_ok {
        return Err(ValidationError::ModelIdInvalidChars);
    }

    let is_separator = |c: char| c == '_' || c == '-';
    if suffix.starts_with(is_separator) || suffix.ends_with(is_separator) {
        return Err(ValidationError::ModelIdInvalidFormat);
    }

    Ok(())
}

/// Check the scheme of an account base URL. Returns the trimmed value.
pub fn validate_base_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::BaseUrlScheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_lowercases() {
        assert_eq!(normalize_model_id("Foo_Bar").unwrap(), "aio_foo_bar");
        assert_eq!(normalize_model_id("  gpt4o ").unwrap(), "aio_gpt4o");
    }

    #[test]
    fn keeps_existing_prefix() {
        assert_eq!(normalize_model_id("AIO_Claude-3").unwrap(), "aio_claude-3");
    }

    #[test]
    fn idempotent() {
        for raw in ["Foo_Bar", "x", "aio_a-b_c", "0123456789"] {
            let once = normalize_model_id(raw).unwrap();
            assert_eq!(normalize_model_id(&once).unwrap(), once);
        }
    }

    #[test]
    fn suffix_length_limit() {
        assert_eq!(
            normalize_model_id("aio_this-is-too-long-1"),
            Err(ValidationError::ModelIdTooLong)
        );
        assert!(normalize_model_id("abcdefghij").is_ok());
        assert_eq!(
            normalize_model_id("abcdefghijk"),
            Err(ValidationError::ModelIdTooLong)
        );
    }

    #[test]
    fn separators_at_edges() {
        assert_eq!(
            normalize_model_id("-bad"),
            Err(ValidationError::ModelIdInvalidFormat)
        );
        assert_eq!(
            normalize_model_id("bad-"),
            Err(ValidationError::ModelIdInvalidFormat)
        );
        assert_eq!(
            normalize_model_id("aio__x"),
            Err(ValidationError::ModelIdInvalidFormat)
        );
    }

    #[test]
    fn charset() {
        assert_eq!(
            normalize_model_id("bad*char"),
            Err(ValidationError::ModelIdInvalidChars)
        );
        assert_eq!(
            normalize_model_id("aio_"),
            Err(ValidationError::ModelIdInvalidChars)
        );
        assert_eq!(
            normalize_model_id("有效"),
            Err(ValidationError::ModelIdInvalidChars)
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_model_id("   "), Err(ValidationError::ModelIdRequired));
    }

    #[test]
    fn base_url_scheme() {
        assert_eq!(
            validate_base_url(" https://api.example.com ").unwrap(),
            "https://api.example.com"
        );
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert_eq!(
            validate_base_url("ftp://x"),
            Err(ValidationError::BaseUrlScheme)
        );
    }
}
