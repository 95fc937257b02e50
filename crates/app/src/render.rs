// crates/app/src/render.rs
//! Plain-text summary renderer.
//!
//! Stands in for the menu-bar chrome: pulls the store's current state and
//! the projections, writes one readable block. Pure string assembly so the
//! output is testable without a terminal.

use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, Utc, Weekday};

use agentbar_core::format::{
    format_session_duration, format_token_count, peak_hour_label, short_model_name,
};
use agentbar_core::projections;
use agentbar_core::snapshot::StatsSnapshot;
use agentbar_store::{StatsStore, StoreState};

/// Render the store's current state to stdout.
pub fn print_summary(store: &StatsStore) {
    let now = Utc::now();
    let today = Local::now().date_naive();
    println!("{}", summary(store, today, now));
}

/// Build the summary block for the given evaluation time.
pub fn summary(store: &StatsStore, today: NaiveDate, now: DateTime<Utc>) -> String {
    match store.state() {
        StoreState::Empty => "No stats loaded yet.".to_string(),
        StoreState::Failed(message) => {
            format!("{message} (retrying on the next file change)")
        }
        StoreState::Loaded(snapshot) => loaded_summary(snapshot, today, now),
    }
}

fn loaded_summary(snapshot: &StatsSnapshot, today: NaiveDate, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Sessions {} \u{b7} Messages {}",
        snapshot.total_sessions, snapshot.total_messages
    );
    let _ = writeln!(
        out,
        "First session {} days ago",
        projections::days_since_first_session(snapshot, now)
    );
    let _ = writeln!(
        out,
        "Longest session {} ({} messages)",
        format_session_duration(snapshot.longest_session.duration),
        snapshot.longest_session.message_count
    );
    if let Some((hour, _)) = projections::peak_hour(snapshot) {
        let _ = writeln!(out, "Peak hour {}", peak_hour_label(hour));
    }
    if let Some(saved_ms) = snapshot.total_speculation_time_saved_ms {
        let _ = writeln!(out, "Time saved {}", format_session_duration(saved_ms));
    }

    let _ = writeln!(out, "\nThis week:");
    if projections::has_recent_activity(snapshot, today, Weekday::Mon) {
        let week = projections::recent_daily_activity(snapshot, today, Weekday::Mon);
        for day in &week {
            let _ = writeln!(
                out,
                "  {} {:>4} messages \u{b7} {:>2} sessions \u{b7} {:>3} tool calls",
                day.date.format("%a"),
                day.message_count,
                day.session_count,
                day.tool_call_count
            );
        }
    } else {
        let _ = writeln!(out, "  no activity");
    }

    let models = projections::sorted_model_names(snapshot);
    if !models.is_empty() {
        let _ = writeln!(out, "\nModels:");
        for name in &models {
            let usage = &snapshot.model_usage[name];
            let _ = writeln!(
                out,
                "  {} \u{2014} {} tokens \u{b7} ${:.2}",
                short_model_name(name),
                format_token_count(usage.total_tokens()),
                usage.cost_usd
            );
        }
    }

    let hours = projections::sorted_hour_counts(snapshot);
    if !hours.is_empty() {
        let max = hours.iter().map(|&(_, c)| c).max().unwrap_or(1).max(1);
        let _ = writeln!(out, "\nBy hour:");
        for (hour, count) in hours {
            let bar = "\u{2587}".repeat(((count * 20) / max) as usize);
            let _ = writeln!(out, "  {:>4} {} {}", peak_hour_label(hour), bar, count);
        }
    }

    out
}
