//! Elapsed hours between two report times.

use crate::utils::time::{minutes_between, normalize_time, parse_time};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hours between `start` and `end`, rounded to two decimals.
///
/// - `.` and `:` are both accepted as separators.
/// - An end earlier than the start crosses midnight (22:00 → 06:00 = 8h).
/// - Anything that does not parse as a 24h time yields `0.0`; stored rows
///   are recomputed through here on every load, so dirty values must not fail.
pub fn duration_hours(start: &str, end: &str) -> f64 {
    let (Some(t1), Some(t2)) = (
        parse_time(&normalize_time(start)),
        parse_time(&normalize_time(end)),
    ) else {
        return 0.0;
    };

    let mut minutes = minutes_between(t1, t2);
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }

    round2(minutes as f64 / 60.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
