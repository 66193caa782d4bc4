use crate::core::calculator::duration::duration_hours;
use crate::models::lane::Lane;
use serde::{Deserialize, Serialize};

/// Sentinel used for a date or shift that the report does not state.
pub const UNKNOWN: &str = "unknown";

/// One timesheet row produced from an activity line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: String,
    pub shift: String,
    pub lane: Lane,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub duration_hours: f64,
}

impl ActivityRecord {
    /// Build a record; the duration is always derived from the two times.
    pub fn new(
        date: &str,
        shift: &str,
        lane: Lane,
        start_time: String,
        end_time: String,
        description: String,
    ) -> Self {
        let duration_hours = duration_hours(&start_time, &end_time);
        Self {
            date: date.to_string(),
            shift: shift.to_string(),
            lane,
            start_time,
            end_time,
            description,
            duration_hours,
        }
    }

    /// Overwrite `duration_hours` from `start_time` / `end_time`.
    pub fn recompute_duration(&mut self) {
        self.duration_hours = duration_hours(&self.start_time, &self.end_time);
    }

    /// Case-insensitive keyword test on the description.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
