//! Serde helpers for lenient timestamp handling.
//!
//! Due dates and completion stamps come from an external datastore and are
//! not guaranteed to be well formed. A malformed optional timestamp must
//! degrade to `None` (it never counts as overdue and never synthesizes a
//! timeline event) instead of failing the whole snapshot.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::Time;

/// Accepted fallback formats, tried after RFC 3339.
const FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];

/// Parse a timestamp string, returning `None` when it is unparsable.
pub fn parse_lenient(raw: &str) -> Option<Time> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            // Date-only deadlines resolve to midnight UTC.
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Deserialize an optional timestamp, degrading malformed input to `None`.
///
/// Use with `#[serde(default, deserialize_with = "de::option_lenient")]`.
pub fn option_lenient<'de, D>(deserializer: D) -> Result<Option<Time>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_lenient))
}

/// Serialize an optional timestamp as RFC 3339.
pub fn option_rfc3339<S>(value: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}
