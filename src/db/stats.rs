use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = file_size / 1024;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {} KB", CYAN, RESET, file_kb);

    //
    // 2) TRACKERS
    //
    let (active, terminated): (i64, i64) = pool.conn.query_row(
        "SELECT
            COALESCE(SUM(status = 'active'), 0),
            COALESCE(SUM(status = 'terminated'), 0)
         FROM trackers",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Trackers:{} {}{}{} active, {}{}{} terminated",
        CYAN, RESET, GREEN, active, RESET, GREY, terminated, RESET
    );

    //
    // 3) EMPLOYMENT ENTRIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employments", [], |row| row.get(0))?;
    println!(
        "{}• Employment entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 4) LAST CHANGE
    //
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM trackers ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last change:{} {}",
        CYAN,
        RESET,
        last.unwrap_or_else(|| "--".to_string())
    );

    //
    // 5) SCHEMA
    //
    let pending = pending_migrations(&pool.conn)?;
    if pending.is_empty() {
        println!("{}• Schema:{} up to date\n", CYAN, RESET);
    } else {
        println!(
            "{}• Schema:{} {}{} pending migration(s){}\n",
            CYAN,
            RESET,
            YELLOW,
            pending.len(),
            RESET
        );
    }

    Ok(())
}
