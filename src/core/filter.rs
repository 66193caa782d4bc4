//! Record subsets used by listing, export and Pareto.

use crate::models::record::ActivityRecord;

/// Records whose description does NOT contain `keyword` (case-insensitive).
/// A blank keyword keeps everything.
pub fn exclude_keyword(records: &[ActivityRecord], keyword: &str) -> Vec<ActivityRecord> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| !r.mentions(keyword))
        .cloned()
        .collect()
}

/// Apply an optional exclusion keyword.
pub fn apply_exclusion(records: Vec<ActivityRecord>, keyword: Option<&str>) -> Vec<ActivityRecord> {
    match keyword {
        Some(k) => exclude_keyword(&records, k),
        None => records,
    }
}

/// Sum of `duration_hours`, rounded to two decimals.
pub fn total_hours(records: &[ActivityRecord]) -> f64 {
    let sum: f64 = records.iter().map(|r| r.duration_hours).sum();
    (sum * 100.0).round() / 100.0
}
