use crate::core::parser::ParsedReport;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_records;
use crate::errors::AppResult;

/// Business logic for storing a parsed report.
pub struct ImportLogic;

impl ImportLogic {
    /// Append the parsed records to the store and audit the import.
    /// An empty report writes nothing and returns 0.
    pub fn apply(pool: &mut DbPool, parsed: &ParsedReport, source: &str) -> AppResult<usize> {
        if parsed.is_empty() {
            return Ok(0);
        }

        let added = insert_records(pool, &parsed.records, source)?;

        write_log(
            &pool.conn,
            "import",
            &parsed.header.date,
            &format!(
                "Added {added} rows from {source} (shift {})",
                parsed.header.shift
            ),
        )?;

        Ok(added)
    }
}
