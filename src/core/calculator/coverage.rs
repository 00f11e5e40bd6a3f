//! FMCSR history-length rule: at least two years of employment, and when
//! more than one employer is needed to get there, history should reach back
//! ten years.

use crate::core::calculator::timeline::Timeline;
use crate::core::policy::HistoryPolicy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Insufficient,
    Partial,
    Complete,
}

impl CoverageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageStatus::Insufficient => "insufficient",
            CoverageStatus::Partial => "partial",
            CoverageStatus::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub total_days: i64,
    pub required_days: i64,
    pub missing_days: i64,
    pub status: CoverageStatus,
}

pub fn assess_coverage(timeline: &Timeline, policy: &HistoryPolicy) -> Coverage {
    let total = timeline.total_days;

    let (status, required) = if total < policy.min_history_days {
        (CoverageStatus::Insufficient, policy.min_history_days)
    } else if timeline.counted_segments() > 1 && total < policy.full_history_days {
        (CoverageStatus::Partial, policy.full_history_days)
    } else if timeline.counted_segments() > 1 {
        (CoverageStatus::Complete, policy.full_history_days)
    } else {
        (CoverageStatus::Complete, policy.min_history_days)
    };

    Coverage {
        total_days: total,
        required_days: required,
        missing_days: (required - total).max(0),
        status,
    }
}
