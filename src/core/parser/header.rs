//! First pass: block-wide date and shift.

use crate::core::parser::matchers::{LineKind, classify_header_line};
use crate::models::record::UNKNOWN;

/// Date and shift that apply to every record of one pasted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub date: String,
    pub shift: String,
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self {
            date: UNKNOWN.to_string(),
            shift: UNKNOWN.to_string(),
        }
    }
}

/// Scan every line for date and shift header lines.
///
/// Headers may sit anywhere in the block. When a category appears more than
/// once, the last occurrence wins. Missing categories stay `"unknown"`.
pub fn scan_headers<S: AsRef<str>>(lines: &[S]) -> ReportHeader {
    let mut header = ReportHeader::default();

    for line in lines {
        match classify_header_line(line.as_ref()) {
            LineKind::DateLine(date) => header.date = date,
            LineKind::ShiftLine(shift) => header.shift = shift,
            _ => {}
        }
    }

    header
}
