//! Store upkeep behind `shiftsheet db`.

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Outcome of `PRAGMA integrity_check`: `Ok(())` or the first problem SQLite reports.
pub fn integrity_check(pool: &DbPool) -> AppResult<Result<(), String>> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    Ok(if verdict == "ok" { Ok(()) } else { Err(verdict) })
}

pub fn vacuum(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}

/// Re-run the migration routine; already applied steps are skipped.
pub fn migrate(pool: &DbPool) -> AppResult<()> {
    run_pending_migrations(&pool.conn)?;
    Ok(())
}
