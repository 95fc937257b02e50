// crates/core/src/dates.rs
//! Tolerant date decoding for the stats cache.
//!
//! The producer is inconsistent about date encodings: most timestamps are
//! full ISO-8601 instants with fractional seconds
//! (`2026-02-04T12:43:16.754Z`), but some fields carry a bare `yyyy-MM-dd`
//! day. Every date-typed field accepts both; a bare day is interpreted as
//! UTC midnight. A string matching neither format fails the whole decode.
//!
//! Wire this up per field with `#[serde(deserialize_with = "dates::deserialize")]`.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

/// Parse a stats-cache date string in either accepted format.
pub fn parse_flexible(s: &str) -> Option<DateTime<Utc>> {
    // ISO-8601 instant first, the common case.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Fallback: bare calendar day at UTC midnight.
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)));
    }

    None
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible(&s).ok_or_else(|| de::Error::custom(format!("cannot decode date: {s:?}")))
}
