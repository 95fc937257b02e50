// crates/core/src/format.rs
//! Display formatting helpers shared by renderers.

/// Compact token-count rendering: `1_500_000` → `"1.5M"`, `2_300` →
/// `"2.3K"`, anything below a thousand as a bare integer.
pub fn format_token_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Shorten a model identifier of the form `claude-<family>-<major>-<minor>...`
/// to `"<Family> <major>.<minor>"`. Names with fewer than 4 hyphen-separated
/// segments, or whose first segment is not exactly `claude`, pass through
/// unchanged.
pub fn short_model_name(name: &str) -> String {
    let parts: Vec<&str> = name.split('-').collect();
    if parts.len() < 4 || parts[0] != "claude" {
        return name.to_string();
    }
    format!("{} {}.{}", capitalize(parts[1]), parts[2], parts[3])
}

/// Session duration from milliseconds: `"2h 1m"` above an hour, `"7m 34s"`
/// above a minute, else `"45s"`.
pub fn format_session_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// 12-hour clock label for an hour of day: `0` → `"12am"`, `9` → `"9am"`,
/// `12` → `"12pm"`, `15` → `"3pm"`.
pub fn peak_hour_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "am" } else { "pm" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}{}", display, suffix)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
