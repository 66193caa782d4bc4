//! Database row models.

use crate::models::record::ActivityRecord;

/// Where a stored row came from.
pub const SOURCE_REPORT: &str = "report";
pub const SOURCE_LANE: &str = "lane";

/// A persisted record with its row id. Rows come back in insertion order.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: i64,
    pub record: ActivityRecord,
    pub source: String,
    pub created_at: String,
}
