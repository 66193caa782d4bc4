//! Pasted report → timesheet records.
//!
//! Two independent passes over the same lines: `header` finds the
//! block-wide date and shift, `activity` tracks lane headers and turns timed
//! lines into records. Both are pure; nothing is retained between calls.

pub mod activity;
pub mod header;
pub mod matchers;

pub use activity::{parse_activities, parse_lane_activities};
pub use header::{ReportHeader, scan_headers};
pub use matchers::LineKind;

use crate::models::lane::Lane;
use crate::models::record::{ActivityRecord, UNKNOWN};

/// Result of parsing one pasted report.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub header: ReportHeader,
    pub records: Vec<ActivityRecord>,
}

impl ParsedReport {
    /// True when nothing recognisable was found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Multi-lane report: date and shift come from the text itself.
pub fn parse_report(text: &str) -> ParsedReport {
    let lines = report_lines(text);
    let header = scan_headers(&lines);
    let records = parse_activities(&lines, &header.date, &header.shift);

    ParsedReport { header, records }
}

/// Single-lane report: date, lane and (optionally) shift are supplied by
/// the caller and the text is not scanned for headers.
pub fn parse_lane_report(
    text: &str,
    date: &str,
    lane: Lane,
    shift: Option<&str>,
) -> ParsedReport {
    let lines = report_lines(text);
    let header = ReportHeader {
        date: date.trim().to_string(),
        shift: shift.map_or_else(|| UNKNOWN.to_string(), |s| s.trim().to_string()),
    };
    let records = parse_lane_activities(&lines, &header.date, &header.shift, lane);

    ParsedReport { header, records }
}

/// Non-blank lines, trailing whitespace removed.
fn report_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect()
}
