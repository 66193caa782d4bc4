//! Time utilities: parsing HH:MM, normalising report time tokens, formatting hours.

use chrono::NaiveTime;

/// Strict `H:MM` / `HH:MM`. chrono skips whitespace before numeric fields,
/// so any whitespace is rejected up front.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if t.chars().any(char::is_whitespace) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Report authors write `16.00` as often as `16:00`. Whitespace is left in
/// place, so a padded stored value still fails to parse.
pub fn normalize_time(t: &str) -> String {
    t.replace('.', ":")
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// 1.5 → "1.50 h"
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2} h")
}
