use crate::core::calculator::{coverage, gaps, timeline};
use crate::core::policy::HistoryPolicy;
use crate::core::validate;
use crate::models::{employment::EmploymentEntry, history_summary::HistorySummary};

pub struct Core;

impl Core {
    pub fn build_history_summary(
        entries: &[EmploymentEntry],
        policy: &HistoryPolicy,
    ) -> HistorySummary {
        let timeline = timeline::calculate_timeline(entries);
        let gaps = gaps::find_gaps(&timeline, policy.gap_threshold_days);
        let coverage = coverage::assess_coverage(&timeline, policy);
        let issues = validate::collect_issues(entries, &timeline, &gaps, &coverage);

        HistorySummary {
            timeline,
            gaps,
            coverage,
            issues,
        }
    }
}
