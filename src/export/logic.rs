// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::HistoryPolicy;
use crate::db::pool::DbPool;
use crate::db::queries::{list_trackers, load_employments, require_tracker};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimelineExport;
use crate::export::xlsx::export_xlsx;
use crate::models::employment::EmploymentEntry;
use crate::models::tracker::Tracker;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// High-level export of timeline reports.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the timeline of one tracker (`tracker = Some`) or of all trackers.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        tracker: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;

        ensure_writable(&path, force)?;

        let trackers = match tracker {
            Some(name) => vec![require_tracker(&pool.conn, name)?],
            None => list_trackers(&pool.conn)?,
        };

        let policy = HistoryPolicy::from_config(cfg);
        let mut rows = Vec::new();

        for t in &trackers {
            let entries: Vec<EmploymentEntry> = load_employments(&pool.conn, t.id)?
                .into_iter()
                .map(|r| r.entry)
                .collect();
            rows.extend(build_rows(t, &entries, &policy));
        }

        if rows.is_empty() {
            warning("No employment entries found to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

/// One report row per entry, in timeline order.
pub fn build_rows(
    tracker: &Tracker,
    entries: &[EmploymentEntry],
    policy: &HistoryPolicy,
) -> Vec<TimelineExport> {
    let summary = Core::build_history_summary(entries, policy);

    summary
        .timeline
        .segments
        .iter()
        .zip(entries)
        .map(|(seg, entry)| TimelineExport::build(tracker, entry, seg, &summary))
        .collect()
}
