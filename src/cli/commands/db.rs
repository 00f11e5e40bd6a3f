use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::colors::{CYAN, RESET};
use rusqlite::Connection;

/// Handle the `db` subcommand. Steps run in a fixed order: migrate, info,
/// check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if *migrate {
            // must run before DbPool::new, which migrates silently
            let conn = Connection::open(&cfg.database)?;
            step("Running migrations");
            let pending = pending_migrations(&conn)?;
            if pending.is_empty() {
                info("Schema already up to date.");
            } else {
                run_pending_migrations(&conn)?;
                success(format!("{} migration(s) applied.", pending.len()));
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            step("Running integrity check");
            integrity_check(&pool.conn)?;
        }

        if *vacuum {
            step("Running VACUUM");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}

fn step(label: &str) {
    println!("{}▶ {}…{}", CYAN, label, RESET);
}

/// SQLite page integrity plus employment rows whose tracker is gone.
fn integrity_check(conn: &Connection) -> AppResult<()> {
    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity != "ok" {
        error(format!("Integrity check failed: {}", integrity));
        return Ok(());
    }

    let orphans: i64 = conn.query_row(
        "SELECT COUNT(*) FROM employments e
         LEFT JOIN trackers t ON t.id = e.tracker_id
         WHERE t.id IS NULL",
        [],
        |row| row.get(0),
    )?;

    if orphans > 0 {
        warning(format!(
            "{} employment entr{} without a tracker.",
            orphans,
            if orphans == 1 { "y" } else { "ies" }
        ));
    } else {
        success("Integrity check passed.");
    }

    Ok(())
}
