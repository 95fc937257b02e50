// crates/core/src/snapshot.rs
//! The decoded stats cache document.
//!
//! A separate producer process computes usage statistics and writes them to
//! a single JSON cache file; this module decodes those bytes into one
//! immutable [`StatsSnapshot`]. Decoding is all-or-nothing: a new snapshot
//! is created whole and atomically replaces the previous one in the store,
//! never patched field by field.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::dates;
use crate::error::DecodeError;

/// One fully-decoded, immutable stats document.
///
/// `version` is a forward-compatibility tag; unknown future values must
/// not fail the decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub version: i64,
    #[serde(deserialize_with = "dates::deserialize")]
    pub last_computed_date: DateTime<Utc>,
    pub daily_activity: Vec<DailyActivity>,
    pub daily_model_tokens: Vec<DailyModelTokens>,
    pub model_usage: HashMap<String, ModelUsage>,
    pub total_sessions: u64,
    pub total_messages: u64,
    pub longest_session: LongestSession,
    #[serde(deserialize_with = "dates::deserialize")]
    pub first_session_date: DateTime<Utc>,
    /// Hour-of-day ("0".."23") → event count. Keys that do not parse as an
    /// hour are carried through here and discarded by projections, not
    /// treated as a decode error.
    pub hour_counts: HashMap<String, u64>,
    /// Absent means "unset", which is distinct from zero time saved.
    #[serde(default)]
    pub total_speculation_time_saved_ms: Option<u64>,
}

/// Per-calendar-day activity counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    #[serde(deserialize_with = "dates::deserialize")]
    pub date: DateTime<Utc>,
    pub message_count: u64,
    pub session_count: u64,
    pub tool_call_count: u64,
}

impl DailyActivity {
    /// An all-zero entry for a day absent from the cache.
    pub fn empty(date: DateTime<Utc>) -> Self {
        Self {
            date,
            message_count: 0,
            session_count: 0,
            tool_call_count: 0,
        }
    }
}

/// Per-day token counts, keyed by model name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyModelTokens {
    #[serde(deserialize_with = "dates::deserialize")]
    pub date: DateTime<Utc>,
    pub tokens_by_model: HashMap<String, u64>,
}

/// Cumulative usage for one model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_input_tokens: u64,
    pub cache_creation_input_tokens: u64,
    pub web_search_requests: u64,
    #[serde(rename = "costUSD")]
    pub cost_usd: f64,
    #[serde(default)]
    pub context_window: Option<u64>,
    #[serde(default)]
    pub max_output_tokens: Option<u64>,
}

impl ModelUsage {
    /// Headline per-model roll-up: input + output + cache reads.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens + self.cache_read_input_tokens
    }
}

/// The single longest recorded session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongestSession {
    pub session_id: String,
    /// Duration in milliseconds.
    pub duration: u64,
    pub message_count: u64,
    #[serde(deserialize_with = "dates::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Decode a stats cache document from raw bytes.
///
/// Fails if the bytes are not valid JSON for the schema, or if any
/// date-typed field matches neither accepted format (see [`crate::dates`]).
/// No partial snapshot is ever produced.
pub fn decode_snapshot(bytes: &[u8]) -> Result<StatsSnapshot, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

impl StatsSnapshot {
    /// A fully-populated snapshot with fixed values, for tests and preview
    /// rendering.
    pub fn sample() -> Self {
        let day = |s: &str| dates::parse_flexible(s).expect("valid sample date");

        let daily_activity = vec![
            DailyActivity {
                date: day("2026-02-02"),
                message_count: 48,
                session_count: 4,
                tool_call_count: 21,
            },
            DailyActivity {
                date: day("2026-02-03"),
                message_count: 92,
                session_count: 8,
                tool_call_count: 16,
            },
            DailyActivity {
                date: day("2026-02-04"),
                message_count: 31,
                session_count: 2,
                tool_call_count: 9,
            },
        ];

        let daily_model_tokens = vec![DailyModelTokens {
            date: day("2026-02-03"),
            tokens_by_model: HashMap::from([
                ("claude-sonnet-4-5-20250929".to_string(), 48_200),
                ("claude-haiku-4-5-20251001".to_string(), 9_100),
            ]),
        }];

        let model_usage = HashMap::from([(
            "claude-opus-4-5-20251101".to_string(),
            ModelUsage {
                input_tokens: 150_000,
                output_tokens: 45_000,
                cache_read_input_tokens: 80_000,
                cache_creation_input_tokens: 20_000,
                web_search_requests: 5,
                cost_usd: 2.45,
                context_window: Some(200_000),
                max_output_tokens: Some(16_000),
            },
        )]);

        let hour_counts = (0..24)
            .map(|h| (h.to_string(), ((h * 7) % 23) as u64))
            .collect();

        Self {
            version: 1,
            last_computed_date: day("2026-02-06T08:15:00.000Z"),
            daily_activity,
            daily_model_tokens,
            model_usage,
            total_sessions: 42,
            total_messages: 567,
            longest_session: LongestSession {
                session_id: "sample-session-123".to_string(),
                duration: 7_254_000,
                message_count: 89,
                timestamp: day("2026-02-03T14:02:11.412Z"),
            },
            first_session_date: day("2026-01-07T09:30:00.000Z"),
            hour_counts,
            total_speculation_time_saved_ms: Some(125_000),
        }
    }
}
