//! Versioned schema migrations.
//!
//! Each migration runs once; applied versions are recorded in the `log`
//! table as `migration_applied` rows, so the log doubles as schema history.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_trackers",
        description: "Created trackers table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS trackers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            status      TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','terminated')),
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20261001_0002_create_employments",
        description: "Created employments table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employments (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            tracker_id          INTEGER NOT NULL REFERENCES trackers(id) ON DELETE CASCADE,
            position            INTEGER NOT NULL,
            employer_name       TEXT NOT NULL DEFAULT '',
            job_title           TEXT NOT NULL DEFAULT '',
            date_from           TEXT NOT NULL DEFAULT '',
            date_to             TEXT NOT NULL DEFAULT '',
            gap_explanation     TEXT,
            reason_for_leaving  TEXT NOT NULL DEFAULT '',
            created_at          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_employments_tracker_pos
            ON employments(tracker_id, position);
        "#,
    },
    Migration {
        version: "20261012_0003_add_fmcsr_flags",
        description: "Added FMCSR / safety-sensitive flags to employments",
        sql: r#"
        ALTER TABLE employments ADD COLUMN subject_to_fmcsr INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE employments ADD COLUMN safety_sensitive INTEGER NOT NULL DEFAULT 0;
        "#,
    },
];

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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
