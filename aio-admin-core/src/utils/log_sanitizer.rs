//! Keep response bodies short in logs.
//!
//! Account payloads carry API keys, so bodies are cut before they reach a
//! debug line.

/// Maximum number of characters kept in a logged body.
const LOG_BODY_LIMIT: usize = 200;

/// Truncate `s` to [`LOG_BODY_LIMIT`] characters, noting the original size.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_BODY_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... ({} bytes)", &s[..cut], s.len()),
    }
}
