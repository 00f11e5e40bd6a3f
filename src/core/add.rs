use crate::db::log::whlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    get_or_create_tracker, insert_employment, load_employments, require_tracker,
    update_employment,
};
use crate::errors::{AppError, AppResult};
use crate::models::employment::EmploymentPatch;
use crate::models::tracker::Tracker;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_form_date;

/// High-level business logic for the `add` command.
pub struct AddLogic;

/// Terminated trackers are read-only.
pub(crate) fn ensure_editable(tracker: &Tracker) -> AppResult<()> {
    if tracker.status.is_active() {
        Ok(())
    } else {
        Err(AppError::TrackerTerminated(tracker.name.clone()))
    }
}

/// Dates typed on the command line must at least parse; an empty string
/// is allowed (the form may be saved half-filled).
fn check_date_arg(value: &Option<String>) -> AppResult<()> {
    if let Some(v) = value
        && !v.trim().is_empty()
        && parse_form_date(v).is_none()
    {
        return Err(AppError::InvalidDate(v.clone()));
    }
    Ok(())
}

impl AddLogic {
    /// Insert a new entry, or patch entry `edit_index` when `edit_mode` is set.
    /// Returns the timeline index of the affected entry.
    pub fn apply(
        pool: &mut DbPool,
        tracker_name: &str,
        patch: EmploymentPatch,
        at: Option<usize>,
        edit_mode: bool,
        edit_index: Option<usize>,
    ) -> AppResult<usize> {
        check_date_arg(&patch.from)?;
        check_date_arg(&patch.to)?;

        // ------------------------------------------------
        // 1️⃣ EDIT MODE
        // ------------------------------------------------
        if edit_mode {
            let index = edit_index
                .ok_or_else(|| AppError::Other("Missing --entry when using --edit.".into()))?;

            let tracker = require_tracker(&pool.conn, tracker_name)?;
            ensure_editable(&tracker)?;

            if patch.is_empty() {
                warning("Nothing to update: no field was given.");
                return Ok(index);
            }

            let mut records = load_employments(&pool.conn, tracker.id)?;
            let record = records
                .get_mut(index)
                .ok_or(AppError::InvalidIndex(index))?;

            patch.apply_to(&mut record.entry);
            update_employment(&pool.conn, record)?;

            whlog_quiet(
                &pool.conn,
                "edit",
                tracker_name,
                &format!("Updated entry #{} ({})", index, record.entry.display_name()),
            );
            success(format!("Entry #{} of '{}' updated.", index, tracker_name));

            return Ok(index);
        }

        // ------------------------------------------------
        // 2️⃣ INSERT MODE
        // ------------------------------------------------
        let tracker = get_or_create_tracker(&pool.conn, tracker_name)?;
        ensure_editable(&tracker)?;

        let entry = patch.into_entry();
        let index = insert_employment(&pool.conn, tracker.id, at, &entry)?;

        whlog_quiet(
            &pool.conn,
            "add",
            tracker_name,
            &format!(
                "Added entry #{} ({}, {} → {})",
                index,
                entry.display_name(),
                entry.from,
                entry.to
            ),
        );
        success(format!(
            "Entry #{} ({}) added to '{}'.",
            index,
            entry.display_name(),
            tracker_name
        ));

        Ok(index)
    }
}
