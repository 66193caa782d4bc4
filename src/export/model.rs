// src/export/model.rs

use crate::models::record::ActivityRecord;

/// Header for CSV / XLSX (same order as the serialized record fields).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "shift",
        "lane",
        "start_time",
        "end_time",
        "description",
        "duration_hours",
    ]
}

/// A record as a row of cell strings.
pub(crate) fn record_to_row(r: &ActivityRecord) -> Vec<String> {
    vec![
        r.date.clone(),
        r.shift.clone(),
        r.lane.to_string(),
        r.start_time.clone(),
        r.end_time.clone(),
        r.description.clone(),
        format!("{:.2}", r.duration_hours),
    ]
}
