use crate::config::Config;
use crate::core::import::{ImportFormat, read_entries};
use crate::core::logic::Core;
use crate::core::policy::HistoryPolicy;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employments, require_tracker};
use crate::errors::AppResult;
use crate::models::employment::EmploymentEntry;
use crate::models::history_summary::HistorySummary;

/// Entries plus the summary computed over them.
pub struct CheckedHistory {
    pub subject: String,
    pub entries: Vec<EmploymentEntry>,
    pub summary: HistorySummary,
}

pub struct CheckLogic;

impl CheckLogic {
    pub fn tracker(pool: &mut DbPool, name: &str, cfg: &Config) -> AppResult<CheckedHistory> {
        let tracker = require_tracker(&pool.conn, name)?;
        let entries: Vec<EmploymentEntry> = load_employments(&pool.conn, tracker.id)?
            .into_iter()
            .map(|r| r.entry)
            .collect();

        Ok(Self::entries(name, entries, cfg))
    }

    pub fn file(file: &str, format: Option<ImportFormat>, cfg: &Config) -> AppResult<CheckedHistory> {
        let entries = read_entries(file, format)?;
        Ok(Self::entries(file, entries, cfg))
    }

    pub fn entries(subject: &str, entries: Vec<EmploymentEntry>, cfg: &Config) -> CheckedHistory {
        let policy = HistoryPolicy::from_config(cfg);
        let summary = Core::build_history_summary(&entries, &policy);

        CheckedHistory {
            subject: subject.to_string(),
            entries,
            summary,
        }
    }
}
