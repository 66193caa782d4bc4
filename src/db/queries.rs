use crate::db::models::StoredRecord;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::lane::Lane;
use crate::models::record::ActivityRecord;
use chrono::Local;
use rusqlite::params;
use rusqlite::{Result, Row};

const SELECT_RECORDS: &str = "SELECT id, date, shift, lane, start_time, end_time, description,
        duration_hours, source, created_at
 FROM records";

/// Append a parsed batch in one transaction. Returns the number of rows written.
pub fn insert_records(pool: &mut DbPool, records: &[ActivityRecord], source: &str) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let tx = pool.conn.transaction()?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO records
                (date, shift, lane, start_time, end_time, description, duration_hours, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;

        for r in records {
            stmt.execute(params![
                r.date,
                r.shift,
                r.lane.to_db_str(),
                r.start_time,
                r.end_time,
                r.description,
                r.duration_hours,
                source,
                now,
            ])?;
        }
    }

    tx.commit()?;
    Ok(records.len())
}

/// All stored rows in insertion order, durations recomputed.
pub fn load_records(pool: &mut DbPool) -> AppResult<Vec<StoredRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_RECORDS} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Rows whose date string equals `date` exactly.
pub fn load_records_by_date(pool: &mut DbPool, date: &str) -> AppResult<Vec<StoredRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_RECORDS} WHERE date = ?1 ORDER BY id ASC"))?;

    let rows = stmt.query_map([date], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct date strings in order of first insertion.
pub fn distinct_dates(pool: &mut DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date FROM records GROUP BY date ORDER BY MIN(id) ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete every row. Returns how many were removed.
pub fn delete_all(pool: &mut DbPool) -> AppResult<usize> {
    Ok(pool.conn.execute("DELETE FROM records", [])?)
}

/// Delete rows whose date string equals `date` exactly.
pub fn delete_by_date(pool: &mut DbPool, date: &str) -> AppResult<usize> {
    Ok(pool
        .conn
        .execute("DELETE FROM records WHERE date = ?1", [date])?)
}

pub fn count_records(pool: &mut DbPool) -> AppResult<i64> {
    Ok(pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?)
}

/// Mapping DB → StoredRecord. The stored duration column is ignored.
pub fn map_row(row: &Row) -> Result<StoredRecord> {
    let lane_str: String = row.get("lane")?;
    let lane = Lane::from_db_str(&lane_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLane(lane_str.clone())),
        )
    })?;

    let mut record = ActivityRecord {
        date: row.get("date")?,
        shift: row.get("shift")?,
        lane,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        description: row.get("description")?,
        duration_hours: row.get("duration_hours")?,
    };
    record.recompute_duration();

    Ok(StoredRecord {
        id: row.get("id")?,
        record,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}
