use crate::errors::{AppError, AppResult};
use crate::models::employment::{EmploymentEntry, EmploymentRecord};
use crate::models::tracker::{Tracker, TrackerStatus};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EMPLOYMENT_COLUMNS: &str = "id, tracker_id, position, employer_name, job_title, date_from, \
     date_to, gap_explanation, reason_for_leaving, subject_to_fmcsr, safety_sensitive, created_at";

fn now() -> String {
    Local::now().to_rfc3339()
}

// ---------------------------
// Trackers
// ---------------------------

fn map_tracker(row: &Row) -> Result<Tracker> {
    let status_str: String = row.get("status")?;
    let status = TrackerStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid tracker status: {}", status_str))),
        )
    })?;

    Ok(Tracker {
        id: row.get("id")?,
        name: row.get("name")?,
        status,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn find_tracker(conn: &Connection, name: &str) -> AppResult<Option<Tracker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, status, created_at, updated_at FROM trackers WHERE name = ?1",
    )?;
    Ok(stmt.query_row([name], map_tracker).optional()?)
}

pub fn require_tracker(conn: &Connection, name: &str) -> AppResult<Tracker> {
    find_tracker(conn, name)?.ok_or_else(|| AppError::TrackerNotFound(name.to_string()))
}

pub fn get_or_create_tracker(conn: &Connection, name: &str) -> AppResult<Tracker> {
    if let Some(t) = find_tracker(conn, name)? {
        return Ok(t);
    }

    let ts = now();
    conn.execute(
        "INSERT INTO trackers (name, status, created_at, updated_at)
         VALUES (?1, 'active', ?2, ?2)",
        params![name, ts],
    )?;

    require_tracker(conn, name)
}

pub fn list_trackers(conn: &Connection) -> AppResult<Vec<Tracker>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, status, created_at, updated_at FROM trackers ORDER BY name ASC",
    )?;
    let rows = stmt.query_map([], map_tracker)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_tracker_status(conn: &Connection, tracker_id: i64, status: TrackerStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE trackers SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.to_db_str(), now(), tracker_id],
    )?;
    Ok(())
}

fn touch_tracker(conn: &Connection, tracker_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE trackers SET updated_at = ?1 WHERE id = ?2",
        params![now(), tracker_id],
    )?;
    Ok(())
}

/// Delete a tracker and all of its employment entries.
pub fn delete_tracker(conn: &Connection, tracker_id: i64) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM employments WHERE tracker_id = ?1", [tracker_id])?;
    tx.execute("DELETE FROM trackers WHERE id = ?1", [tracker_id])?;
    tx.commit()?;
    Ok(())
}

// ---------------------------
// Employments
// ---------------------------

pub fn map_employment(row: &Row) -> Result<EmploymentRecord> {
    let position: i64 = row.get("position")?;

    Ok(EmploymentRecord {
        id: row.get("id")?,
        tracker_id: row.get("tracker_id")?,
        position: position.max(0) as usize,
        entry: EmploymentEntry {
            employer_name: row.get("employer_name")?,
            job_title: row.get("job_title")?,
            from: row.get("date_from")?,
            to: row.get("date_to")?,
            gap_explanation_before: row.get("gap_explanation")?,
            reason_for_leaving: row.get("reason_for_leaving")?,
            subject_to_fmcsr: row.get::<_, i64>("subject_to_fmcsr")? != 0,
            safety_sensitive: row.get::<_, i64>("safety_sensitive")? != 0,
        },
        created_at: row.get("created_at")?,
    })
}

/// Entries of a tracker ordered by timeline index (current employer first).
pub fn load_employments(conn: &Connection, tracker_id: i64) -> AppResult<Vec<EmploymentRecord>> {
    let sql = format!(
        "SELECT {} FROM employments WHERE tracker_id = ?1 ORDER BY position ASC, id ASC",
        EMPLOYMENT_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([tracker_id], map_employment)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn insert_row(conn: &Connection, tracker_id: i64, position: usize, e: &EmploymentEntry) -> Result<usize> {
    conn.execute(
        "INSERT INTO employments
            (tracker_id, position, employer_name, job_title, date_from, date_to,
             gap_explanation, reason_for_leaving, subject_to_fmcsr, safety_sensitive, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            tracker_id,
            position as i64,
            e.employer_name,
            e.job_title,
            e.from,
            e.to,
            e.gap_explanation_before,
            e.reason_for_leaving,
            e.subject_to_fmcsr as i64,
            e.safety_sensitive as i64,
            now(),
        ],
    )
}

/// Insert an entry at timeline index `at` (default: append as the oldest).
/// Entries at or after `at` move one step older.
/// Returns the index the entry was stored at.
pub fn insert_employment(
    conn: &Connection,
    tracker_id: i64,
    at: Option<usize>,
    entry: &EmploymentEntry,
) -> AppResult<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM employments WHERE tracker_id = ?1",
        [tracker_id],
        |row| row.get(0),
    )?;
    let count = count as usize;

    let position = match at {
        Some(i) if i > count => return Err(AppError::InvalidIndex(i)),
        Some(i) => i,
        None => count,
    };

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "UPDATE employments SET position = position + 1
         WHERE tracker_id = ?1 AND position >= ?2",
        params![tracker_id, position as i64],
    )?;
    insert_row(&tx, tracker_id, position, entry)?;
    touch_tracker(&tx, tracker_id)?;
    tx.commit()?;

    Ok(position)
}

pub fn update_employment(conn: &Connection, record: &EmploymentRecord) -> AppResult<()> {
    let e = &record.entry;
    conn.execute(
        "UPDATE employments SET
            employer_name = ?1, job_title = ?2, date_from = ?3, date_to = ?4,
            gap_explanation = ?5, reason_for_leaving = ?6,
            subject_to_fmcsr = ?7, safety_sensitive = ?8
         WHERE id = ?9",
        params![
            e.employer_name,
            e.job_title,
            e.from,
            e.to,
            e.gap_explanation_before,
            e.reason_for_leaving,
            e.subject_to_fmcsr as i64,
            e.safety_sensitive as i64,
            record.id,
        ],
    )?;
    touch_tracker(conn, record.tracker_id)?;
    Ok(())
}

/// Delete the entry at `index` and close the hole in the positions.
pub fn delete_employment(conn: &Connection, tracker_id: i64, index: usize) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    let deleted = tx.execute(
        "DELETE FROM employments WHERE tracker_id = ?1 AND position = ?2",
        params![tracker_id, index as i64],
    )?;

    if deleted == 0 {
        return Err(AppError::InvalidIndex(index));
    }

    tx.execute(
        "UPDATE employments SET position = position - 1
         WHERE tracker_id = ?1 AND position > ?2",
        params![tracker_id, index as i64],
    )?;
    touch_tracker(&tx, tracker_id)?;
    tx.commit()?;

    Ok(())
}

/// Replace (or extend) a tracker's entries with an imported list.
/// With `replace == false` the imported entries are appended as older ones.
pub fn store_employments(
    conn: &Connection,
    tracker_id: i64,
    entries: &[EmploymentEntry],
    replace: bool,
) -> AppResult<usize> {
    let tx = conn.unchecked_transaction()?;

    if replace {
        tx.execute("DELETE FROM employments WHERE tracker_id = ?1", [tracker_id])?;
    }

    let start: i64 = tx.query_row(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM employments WHERE tracker_id = ?1",
        [tracker_id],
        |row| row.get(0),
    )?;

    for (i, e) in entries.iter().enumerate() {
        insert_row(&tx, tracker_id, start as usize + i, e)?;
    }

    touch_tracker(&tx, tracker_id)?;
    tx.commit()?;

    Ok(entries.len())
}
