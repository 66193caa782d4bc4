use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `records` table exists.
fn records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `records` table has the given column.
fn records_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `records` table with the current schema.
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            shift          TEXT NOT NULL,
            lane           TEXT NOT NULL CHECK(lane IN ('A','B','Trucking')),
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            description    TEXT NOT NULL,
            duration_hours REAL NOT NULL DEFAULT 0,
            source         TEXT NOT NULL DEFAULT 'report',
            created_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Tables created before the single-lane import existed have no `source`.
fn migrate_add_source_column(conn: &Connection) -> Result<()> {
    warning("Adding 'source' column to records table...");

    conn.execute(
        "ALTER TABLE records ADD COLUMN source TEXT NOT NULL DEFAULT 'report';",
        [],
    )?;

    success("'source' column added.");
    Ok(())
}

/// Run `sql` once, tracking it as a `migration_applied` row in `log`.
fn apply_once(conn: &Connection, version: &str, sql: &str, message: &str) -> Result<()> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute_batch(sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !records_table_exists(conn)? {
        create_records_table(conn)?;
    } else if !records_has_column(conn, "source")? {
        migrate_add_source_column(conn)?;
    }

    apply_once(
        conn,
        "20251005_0001_records_date_index",
        "CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);",
        "Added date index to records",
    )?;

    Ok(())
}
