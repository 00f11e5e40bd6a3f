use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an audit line into the `log` table.
///
/// `operation` is a short verb (`add`, `edit`, `del`, `import`, ...),
/// `target` usually the tracker name.
pub fn whlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like `whlog`, but a failure only prints a warning.
pub fn whlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = whlog(conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
