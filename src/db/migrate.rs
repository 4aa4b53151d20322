use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and remembered in the `log` table.
pub struct Migration {
    pub version: &'static str,
    pub message: &'static str,
    pub sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_initial_schema",
        message: "Created objects, types, links and events tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS maintenance_objects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            parent_id   INTEGER NULL REFERENCES maintenance_objects(id)
        );

        CREATE TABLE IF NOT EXISTS maintenance_types (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            parent_id   INTEGER NULL REFERENCES maintenance_types(id)
        );

        CREATE TABLE IF NOT EXISTS maintenance_links (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            maintenance_object_id INTEGER NOT NULL REFERENCES maintenance_objects(id),
            maintenance_type_id   INTEGER NOT NULL REFERENCES maintenance_types(id),
            periodicity           INTEGER NULL,
            UNIQUE (maintenance_object_id, maintenance_type_id)
        );

        CREATE TABLE IF NOT EXISTS maintenance_events (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            maintenance_object_id INTEGER NOT NULL REFERENCES maintenance_objects(id),
            maintenance_type_id   INTEGER NOT NULL REFERENCES maintenance_types(id),
            maintenance_date      TEXT NOT NULL,
            comment               TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: "20240215_0002_lookup_indexes",
        message: "Added parent and event lookup indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_objects_parent ON maintenance_objects(parent_id);
        CREATE INDEX IF NOT EXISTS idx_types_parent ON maintenance_types(parent_id);
        CREATE INDEX IF NOT EXISTS idx_events_pair_date
            ON maintenance_events(maintenance_object_id, maintenance_type_id, maintenance_date);
        "#,
    },
];

/// Ensure that the `log` table exists. It also records applied migrations.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run one migration and record it; both commit in a single transaction.
pub fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let fail = |e: rusqlite::Error| AppError::Migration(format!("{}: {}", m.version, e));

    let tx = conn.unchecked_transaction().map_err(fail)?;
    tx.execute_batch(m.sql).map_err(fail)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )
    .map_err(fail)?;
    tx.commit().map_err(fail)?;

    tracing::info!(version = m.version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    if applied > 0 {
        success(format!("Applied {} database migration(s).", applied));
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
