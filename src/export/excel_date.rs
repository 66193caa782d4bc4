// src/export/excel_date.rs

use crate::core::parser::matchers::DATE_FORMAT;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Try to read a cell value as a report date or a time of day, returning the
/// Excel serial plus its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let date_formats = [(DATE_FORMAT, "dd mmmm yyyy"), ("%Y-%m-%d", "yyyy-mm-dd")];

    for (fmt, num_format) in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some((num_format, naive_date_to_excel_serial(d)));
        }
    }

    if s.contains(':')
        && let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M")
    {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn naive_date_to_excel_serial(d: NaiveDate) -> f64 {
    // 1899-12-30 is day 0 in Excel's (Lotus-compatible) calendar.
    const EXCEL_EPOCH_CE_DAYS: i32 = 693_594;
    (d.num_days_from_ce() - EXCEL_EPOCH_CE_DAYS) as f64
}
