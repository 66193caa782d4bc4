//! Pareto view: hours per activity description, largest first.

use crate::models::lane::Lane;
use crate::models::record::ActivityRecord;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ParetoRow {
    pub description: String,
    pub hours: f64,
    pub cumulative_pct: f64,
}

/// Group by description, sum hours, sort descending (ties by description)
/// and attach the running share of the total. With a zero total every
/// cumulative share is 0.
pub fn pareto(records: &[ActivityRecord]) -> Vec<ParetoRow> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for r in records {
        *sums.entry(r.description.as_str()).or_insert(0.0) += r.duration_hours;
    }

    let mut rows: Vec<(&str, f64)> = sums.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total: f64 = rows.iter().map(|(_, h)| h).sum();
    let mut running = 0.0;

    rows.into_iter()
        .map(|(description, hours)| {
            running += hours;
            let cumulative_pct = if total > 0.0 {
                round2(100.0 * running / total)
            } else {
                0.0
            };
            ParetoRow {
                description: description.to_string(),
                hours: round2(hours),
                cumulative_pct,
            }
        })
        .collect()
}

/// One Pareto table per lane, lanes in order of first appearance.
pub fn pareto_by_lane(records: &[ActivityRecord]) -> Vec<(Lane, Vec<ParetoRow>)> {
    let mut lanes: Vec<Lane> = Vec::new();
    for r in records {
        if !lanes.contains(&r.lane) {
            lanes.push(r.lane);
        }
    }

    lanes
        .into_iter()
        .map(|lane| {
            let subset: Vec<ActivityRecord> =
                records.iter().filter(|r| r.lane == lane).cloned().collect();
            (lane, pareto(&subset))
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
