//! Second pass: lane-scoped timed activities.

use crate::core::parser::matchers::{LineKind, classify_activity_line, classify_timed_line};
use crate::models::lane::Lane;
use crate::models::record::ActivityRecord;

/// Walk the lines tracking the current lane and emit one record per timed
/// activity line found under a lane header.
///
/// Lines before the first lane header cannot be attributed and are dropped,
/// as is anything that is neither a lane header nor a timed activity.
pub fn parse_activities<S: AsRef<str>>(
    lines: &[S],
    date: &str,
    shift: &str,
) -> Vec<ActivityRecord> {
    let mut current_lane: Option<Lane> = None;
    let mut out = Vec::new();

    for line in lines {
        let kind = classify_activity_line(line.as_ref());

        if let LineKind::LaneHeader(lane) = kind {
            current_lane = Some(lane);
            continue;
        }

        let Some(lane) = current_lane else {
            continue;
        };

        if let Some(record) = to_record(kind, date, shift, lane) {
            out.push(record);
        }
    }

    out
}

/// Single-lane submission: the caller already knows date, shift and lane,
/// so every timed line belongs to `lane`. Lane headers are not interpreted.
pub fn parse_lane_activities<S: AsRef<str>>(
    lines: &[S],
    date: &str,
    shift: &str,
    lane: Lane,
) -> Vec<ActivityRecord> {
    lines
        .iter()
        .filter_map(|line| to_record(classify_timed_line(line.as_ref()), date, shift, lane))
        .collect()
}

fn to_record(kind: LineKind, date: &str, shift: &str, lane: Lane) -> Option<ActivityRecord> {
    match kind {
        LineKind::TimeRangeActivity {
            start,
            end,
            description,
        } => Some(ActivityRecord::new(date, shift, lane, start, end, description)),
        LineKind::SingleTimeActivity { time, description } => Some(ActivityRecord::new(
            date,
            shift,
            lane,
            time.clone(),
            time,
            description,
        )),
        _ => None,
    }
}
