//! Line recognisers for pasted shift reports.
//!
//! Every recogniser looks at a single line, anchored at its start (leading
//! whitespace ignored), and either returns the tagged shape it found or
//! nothing. Header lines (date, shift) and activity lines (lane headers,
//! timed activities) are classified by two separate entry points so the two
//! scanning passes never see each other's shapes.

use crate::models::lane::Lane;
use crate::utils::time::normalize_time;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static MONTH_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})\s+([a-z]+)\s+(\d{4})\s*$").expect("month-name date pattern")
});

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})[-/](\d{1,2})[-/](\d{4})\s*$").expect("numeric date pattern")
});

static SHIFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Shift\b[:\s\-]*(.+)$").expect("shift pattern"));

static LANE_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Jalur\s*A\b").expect("lane A pattern"));

static LANE_B: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Jalur\s*B\b").expect("lane B pattern"));

static LANE_TRUCKING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:Mode\s+)?Trucking\b").expect("trucking pattern")
});

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}[.:]\d{2})\s*-\s*(\d{1,2}[.:]\d{2})\s+(.+)$")
        .expect("time range pattern")
});

static SINGLE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}[.:]\d{2})\s+(.+)$").expect("single time pattern")
});

/// Indonesian month names as they appear in report headers.
const MONTHS: [(&str, u32); 12] = [
    ("januari", 1),
    ("februari", 2),
    ("maret", 3),
    ("april", 4),
    ("mei", 5),
    ("juni", 6),
    ("juli", 7),
    ("agustus", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("desember", 12),
];

/// Output format of a recognised calendar date, e.g. `05 October 2025`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Shape of a single report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    NoMatch,
    DateLine(String),
    ShiftLine(String),
    LaneHeader(Lane),
    TimeRangeActivity {
        start: String,
        end: String,
        description: String,
    },
    SingleTimeActivity {
        time: String,
        description: String,
    },
}

/// Classify a line for the header pass: date or shift, in that priority.
pub fn classify_header_line(line: &str) -> LineKind {
    let line = line.trim();

    if let Some(date) = match_month_name_date(line) {
        return LineKind::DateLine(date);
    }
    if let Some(date) = match_numeric_date(line) {
        return LineKind::DateLine(date);
    }
    if let Some(shift) = match_shift(line) {
        return LineKind::ShiftLine(shift);
    }

    LineKind::NoMatch
}

/// Classify a line for the activity pass: lane header first, then a time
/// range, then a single time.
pub fn classify_activity_line(line: &str) -> LineKind {
    let line = line.trim();

    if let Some(lane) = match_lane_header(line) {
        return LineKind::LaneHeader(lane);
    }
    classify_timed_line(line)
}

/// Timed activity shapes only, without lane headers.
pub fn classify_timed_line(line: &str) -> LineKind {
    let line = line.trim();

    if let Some((start, end, description)) = match_time_range(line) {
        return LineKind::TimeRangeActivity {
            start,
            end,
            description,
        };
    }
    if let Some((time, description)) = match_single_time(line) {
        return LineKind::SingleTimeActivity { time, description };
    }

    LineKind::NoMatch
}

/// `05 oktober 2025` (case-insensitive). Unknown month names do not match.
/// A known month with out-of-range numbers yields `day month year` rebuilt
/// from the lowercased parts, e.g. `31 februari 2025`.
pub fn match_month_name_date(line: &str) -> Option<String> {
    let lower = line.to_lowercase();
    let caps = MONTH_NAME_DATE.captures(&lower)?;

    let month_name = &caps[2];
    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, n)| *n)?;

    Some(
        format_date(&caps[1], month, &caps[3])
            .unwrap_or_else(|| format!("{} {} {}", &caps[1], month_name, &caps[3])),
    )
}

/// `05-10-2025` or `05/10/2025`. Invalid calendar values yield the parts
/// joined with `-`, so `31/02/2025` and `31-02-2025` give the same key.
pub fn match_numeric_date(line: &str) -> Option<String> {
    let caps = NUMERIC_DATE.captures(line)?;

    let formatted = caps[2]
        .parse::<u32>()
        .ok()
        .and_then(|month| format_date(&caps[1], month, &caps[3]));

    Some(formatted.unwrap_or_else(|| format!("{}-{}-{}", &caps[1], &caps[2], &caps[3])))
}

/// `Shift B`, `shift: B (pagi)`, `SHIFT - 3` → the remainder, trimmed.
pub fn match_shift(line: &str) -> Option<String> {
    let caps = SHIFT.captures(line)?;
    Some(caps[1].trim().to_string())
}

/// `Jalur A…`, `Jalur B…`, `Trucking…` / `Mode Trucking…`.
pub fn match_lane_header(line: &str) -> Option<Lane> {
    if LANE_A.is_match(line) {
        Some(Lane::A)
    } else if LANE_B.is_match(line) {
        Some(Lane::B)
    } else if LANE_TRUCKING.is_match(line) {
        Some(Lane::Trucking)
    } else {
        None
    }
}

/// `16.00-16.15 Patrol` → (`16:00`, `16:15`, `Patrol`).
pub fn match_time_range(line: &str) -> Option<(String, String, String)> {
    let caps = TIME_RANGE.captures(line)?;
    Some((
        normalize_time(&caps[1]),
        normalize_time(&caps[2]),
        caps[3].trim().to_string(),
    ))
}

/// `16.20 Istirahat` → (`16:20`, `Istirahat`).
pub fn match_single_time(line: &str) -> Option<(String, String)> {
    let caps = SINGLE_TIME.captures(line)?;
    Some((normalize_time(&caps[1]), caps[2].trim().to_string()))
}

fn format_date(day: &str, month: u32, year: &str) -> Option<String> {
    let day = day.parse::<u32>().ok()?;
    let year = year.parse::<i32>().ok().filter(|y| *y >= 1)?;
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format(DATE_FORMAT).to_string())
}
