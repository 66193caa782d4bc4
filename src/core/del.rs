use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all, delete_by_date};
use crate::errors::{AppError, AppResult};

/// What to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    All,
    /// Matched by exact string equality against the stored date.
    Date(String),
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Returns the number of removed rows.
    pub fn apply(pool: &mut DbPool, target: &DeleteTarget) -> AppResult<usize> {
        let (removed, target_label) = match target {
            DeleteTarget::All => (delete_all(pool)?, "all".to_string()),
            DeleteTarget::Date(date) => {
                let n = delete_by_date(pool, date)?;
                if n == 0 {
                    return Err(AppError::NoRecordsForDate(date.clone()));
                }
                (n, date.clone())
            }
        };

        write_log(
            &pool.conn,
            "del",
            &target_label,
            &format!("Deleted {removed} rows"),
        )?;

        Ok(removed)
    }
}
