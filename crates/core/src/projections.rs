// crates/core/src/projections.rs
//! Pure, read-only projections of a snapshot into display-ready values.
//!
//! Renderers pull these on demand; nothing here caches or mutates. Functions
//! that depend on "now" take it as a parameter so results are recomputed at
//! evaluation time and tests stay deterministic.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use crate::snapshot::{DailyActivity, StatsSnapshot};

/// The 7 days of the calendar week containing `today`, in order from
/// `week_start`. Days absent from the cache are filled with all-zero
/// entries; matching is by calendar-day equality in UTC, not exact
/// timestamp equality.
pub fn recent_daily_activity(
    snapshot: &StatsSnapshot,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<DailyActivity> {
    let first_day = today.week(week_start).first_day();

    (0..7)
        .map(|offset| {
            let day = first_day + chrono::Days::new(offset);
            snapshot
                .daily_activity
                .iter()
                .find(|a| a.date.date_naive() == day)
                .cloned()
                .unwrap_or_else(|| {
                    DailyActivity::empty(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)))
                })
        })
        .collect()
}

/// True iff any day of the current week has a nonzero message, session, or
/// tool-call count.
pub fn has_recent_activity(snapshot: &StatsSnapshot, today: NaiveDate, week_start: Weekday) -> bool {
    recent_daily_activity(snapshot, today, week_start)
        .iter()
        .any(|a| a.message_count > 0 || a.session_count > 0 || a.tool_call_count > 0)
}

/// The hour with the highest event count, with ties broken to the lowest
/// hour. `None` when `hourCounts` is empty or has no parseable key.
pub fn peak_hour(snapshot: &StatsSnapshot) -> Option<(u32, u64)> {
    let mut best: Option<(u32, u64)> = None;
    for (hour, count) in sorted_hour_counts(snapshot) {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((hour, count)),
        }
    }
    best
}

/// Model names from `modelUsage`, ascending lexicographic.
pub fn sorted_model_names(snapshot: &StatsSnapshot) -> Vec<String> {
    let mut names: Vec<String> = snapshot.model_usage.keys().cloned().collect();
    names.sort();
    names
}

/// `hourCounts` entries with parseable integer keys, ascending by hour.
/// Keys that do not parse are dropped silently.
pub fn sorted_hour_counts(snapshot: &StatsSnapshot) -> Vec<(u32, u64)> {
    let mut entries: Vec<(u32, u64)> = snapshot
        .hour_counts
        .iter()
        .filter_map(|(key, &count)| key.parse::<u32>().ok().map(|hour| (hour, count)))
        .collect();
    entries.sort_by_key(|&(hour, _)| hour);
    entries
}

/// Whole days elapsed between the first recorded session and `now`.
pub fn days_since_first_session(snapshot: &StatsSnapshot, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(snapshot.first_session_date)
        .num_days()
}
