//! Display helpers for account and model cards

use chrono::{DateTime, Local, TimeZone};

use crate::i18n::Translator;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Mask an API key as `abcd****wxyz`; keys of 8 characters or fewer become `****`.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}****{tail}")
    } else {
        "****".to_string()
    }
}

/// Age of a timestamp, bucketed the way cards display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeTime {
    Never,
    JustNow,
    MinutesAgo(i64),
    HoursAgo(i64),
    DaysAgo(i64),
    /// Older than a week, `YYYY-MM-DD` in local time
    Date(String),
}

impl RelativeTime {
    /// Bucket `timestamp_ms` relative to `now_ms`.
    pub fn between(timestamp_ms: i64, now_ms: i64) -> Self {
        if timestamp_ms == 0 {
            return Self::Never;
        }

        let diff = now_ms - timestamp_ms;
        if diff < MINUTE_MS {
            Self::JustNow
        } else if diff < HOUR_MS {
            Self::MinutesAgo(diff / MINUTE_MS)
        } else if diff < DAY_MS {
            Self::HoursAgo(diff / HOUR_MS)
        } else if diff < WEEK_MS {
            Self::DaysAgo(diff / DAY_MS)
        } else {
            Self::Date(
                local_datetime(timestamp_ms)
                    .map(|dt| dt.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            )
        }
    }

    pub fn describe(&self, tr: &Translator) -> String {
        match self {
            Self::Never => tr.t("time.neverUpdated"),
            Self::JustNow => tr.t("time.justNow"),
            Self::MinutesAgo(n) => tr.t_with("time.minutesAgo", &[("minutes", &n.to_string())]),
            Self::HoursAgo(n) => tr.t_with("time.hoursAgo", &[("hours", &n.to_string())]),
            Self::DaysAgo(n) => tr.t_with("time.daysAgo", &[("days", &n.to_string())]),
            Self::Date(date) => date.clone(),
        }
    }
}

/// "Last updated" text of an account card.
pub fn format_relative(tr: &Translator, timestamp_ms: i64) -> String {
    RelativeTime::between(timestamp_ms, Local::now().timestamp_millis()).describe(tr)
}

/// Full local date and time of a model card, empty when unset.
pub fn format_datetime(timestamp_ms: i64) -> String {
    if timestamp_ms == 0 {
        return String::new();
    }
    local_datetime(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn local_datetime(timestamp_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(timestamp_ms).single()
}
