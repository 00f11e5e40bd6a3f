// src/export/model.rs

use crate::core::calculator::timeline::TimelineSegment;
use crate::models::employment::EmploymentEntry;
use crate::models::history_summary::HistorySummary;
use crate::models::tracker::Tracker;
use serde::Serialize;

/// Flat report row: one employment entry with its computed timeline data.
#[derive(Serialize, Clone, Debug)]
pub struct TimelineExport {
    pub tracker: String,
    pub tracker_status: String,
    pub index: usize,
    pub role: String,
    pub employer: String,
    pub job_title: String,
    pub from: String,
    pub to: String,
    pub duration_days: i64,
    pub duration_months: i64,
    pub status: String,
    pub gap_before_days: Option<i64>,
    pub gap_explained: bool,
}

impl TimelineExport {
    pub fn build(
        tracker: &Tracker,
        entry: &EmploymentEntry,
        seg: &TimelineSegment,
        summary: &HistorySummary,
    ) -> Self {
        let gap = summary.gap_before(seg.index);

        Self {
            tracker: tracker.name.clone(),
            tracker_status: tracker.status.to_db_str().to_string(),
            index: seg.index,
            role: seg.role.as_str().to_string(),
            employer: entry.employer_name.clone(),
            job_title: entry.job_title.clone(),
            // normalized when parseable, raw otherwise
            from: seg
                .from
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| entry.from.clone()),
            to: seg
                .to
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| entry.to.clone()),
            duration_days: seg.duration_days,
            duration_months: seg.duration_months,
            status: seg.status.as_str().to_string(),
            gap_before_days: gap.map(|g| g.days),
            gap_explained: gap.is_some() && entry.has_gap_explanation(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "tracker",
        "tracker_status",
        "index",
        "role",
        "employer",
        "job_title",
        "from",
        "to",
        "duration_days",
        "duration_months",
        "status",
        "gap_before_days",
        "gap_explained",
    ]
}

/// Row as strings, in header order (XLSX).
pub(crate) fn row_to_cells(r: &TimelineExport) -> Vec<String> {
    vec![
        r.tracker.clone(),
        r.tracker_status.clone(),
        r.index.to_string(),
        r.role.clone(),
        r.employer.clone(),
        r.job_title.clone(),
        r.from.clone(),
        r.to.clone(),
        r.duration_days.to_string(),
        r.duration_months.to_string(),
        r.status.clone(),
        r.gap_before_days.map(|d| d.to_string()).unwrap_or_default(),
        if r.gap_explained { "yes" } else { "no" }.to_string(),
    ]
}
