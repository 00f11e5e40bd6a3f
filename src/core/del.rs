use crate::core::add::ensure_editable;
use crate::db::log::whlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_employment, delete_tracker, require_tracker};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `index` of a tracker, or the whole tracker when no
    /// index is given.
    pub fn apply(pool: &mut DbPool, tracker_name: &str, index: Option<usize>) -> AppResult<()> {
        let tracker = require_tracker(&pool.conn, tracker_name)?;

        if let Some(i) = index {
            ensure_editable(&tracker)?;
            delete_employment(&pool.conn, tracker.id, i)?;

            whlog_quiet(
                &pool.conn,
                "del",
                tracker_name,
                &format!("Deleted entry #{}", i),
            );
            info(format!("Deleted entry #{} of '{}'", i, tracker_name));
            return Ok(());
        }

        delete_tracker(&pool.conn, tracker.id)?;

        whlog_quiet(&pool.conn, "del", tracker_name, "Deleted tracker");
        info(format!("Deleted tracker '{}'", tracker_name));
        Ok(())
    }
}
