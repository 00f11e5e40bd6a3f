use crate::db::log::whlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{require_tracker, set_tracker_status};
use crate::errors::AppResult;
use crate::models::tracker::TrackerStatus;
use crate::ui::messages::{info, success};

pub struct TrackerLogic;

impl TrackerLogic {
    /// Terminate or restore a tracker. Setting the current status again is
    /// a no-op.
    pub fn set_status(pool: &mut DbPool, name: &str, status: TrackerStatus) -> AppResult<()> {
        let tracker = require_tracker(&pool.conn, name)?;

        if tracker.status == status {
            info(format!("Tracker '{}' is already {}.", name, status.to_db_str()));
            return Ok(());
        }

        set_tracker_status(&pool.conn, tracker.id, status)?;

        let op = match status {
            TrackerStatus::Active => "restore",
            TrackerStatus::Terminated => "terminate",
        };
        whlog_quiet(
            &pool.conn,
            op,
            name,
            &format!("Status changed to {}", status.to_db_str()),
        );
        success(format!("Tracker '{}' is now {}.", name, status.to_db_str()));

        Ok(())
    }
}
