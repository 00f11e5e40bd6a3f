//! Submit-time validation of an employment history.
//!
//! Findings are returned as values. `Severity::Error` blocks progression,
//! `Severity::Warning` is informational.

use crate::core::calculator::coverage::{Coverage, CoverageStatus, assess_coverage};
use crate::core::calculator::gaps::{Gap, find_gaps};
use crate::core::calculator::timeline::{SegmentStatus, Timeline, calculate_timeline};
use crate::core::policy::HistoryPolicy;
use crate::models::employment::EmploymentEntry;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    MissingDates,
    InvalidDate,
    InvertedRange,
    UnexplainedGap {
        days: i64,
    },
    InsufficientHistory {
        total_days: i64,
        required_days: i64,
    },
    IncompleteHistory {
        total_days: i64,
        required_days: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Entry the issue belongs to; `None` for history-wide issues.
    pub index: Option<usize>,
    #[serde(flatten)]
    pub kind: IssueKind,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(index: Option<usize>, kind: IssueKind) -> Self {
        Self {
            index,
            kind,
            severity: Severity::Error,
        }
    }

    fn warning(index: Option<usize>, kind: IssueKind) -> Self {
        Self {
            index,
            kind,
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(i) = self.index {
            write!(f, "entry #{}: ", i)?;
        }

        match &self.kind {
            IssueKind::MissingDates => write!(f, "start and end dates are required"),
            IssueKind::InvalidDate => write!(f, "start or end date is not a valid date"),
            IssueKind::InvertedRange => write!(f, "start date is after end date"),
            IssueKind::UnexplainedGap { days } => write!(
                f,
                "{} day gap before the next employer needs an explanation",
                days
            ),
            IssueKind::InsufficientHistory {
                total_days,
                required_days,
            } => write!(
                f,
                "employment history covers {} of the required {} days; add previous employers",
                total_days, required_days
            ),
            IssueKind::IncompleteHistory {
                total_days,
                required_days,
            } => write!(
                f,
                "employment history covers {} days; up to {} days should be listed",
                total_days, required_days
            ),
        }
    }
}

/// Issues derived from an already computed timeline, gaps and coverage.
pub fn collect_issues(
    entries: &[EmploymentEntry],
    timeline: &Timeline,
    gaps: &[Gap],
    coverage: &Coverage,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for seg in &timeline.segments {
        let kind = match seg.status {
            SegmentStatus::Valid => continue,
            SegmentStatus::MissingDates => IssueKind::MissingDates,
            SegmentStatus::InvalidDate => IssueKind::InvalidDate,
            SegmentStatus::Inverted => IssueKind::InvertedRange,
        };
        issues.push(ValidationIssue::error(Some(seg.index), kind));
    }

    for gap in gaps {
        let explained = entries
            .get(gap.index)
            .is_some_and(|e| e.has_gap_explanation());

        if !explained {
            issues.push(ValidationIssue::error(
                Some(gap.index),
                IssueKind::UnexplainedGap { days: gap.days },
            ));
        }
    }

    match coverage.status {
        CoverageStatus::Insufficient => issues.push(ValidationIssue::error(
            None,
            IssueKind::InsufficientHistory {
                total_days: coverage.total_days,
                required_days: coverage.required_days,
            },
        )),
        CoverageStatus::Partial => issues.push(ValidationIssue::warning(
            None,
            IssueKind::IncompleteHistory {
                total_days: coverage.total_days,
                required_days: coverage.required_days,
            },
        )),
        CoverageStatus::Complete => {}
    }

    issues
}

pub fn validate_history(
    entries: &[EmploymentEntry],
    policy: &HistoryPolicy,
) -> Vec<ValidationIssue> {
    let timeline = calculate_timeline(entries);
    let gaps = find_gaps(&timeline, policy.gap_threshold_days);
    let coverage = assess_coverage(&timeline, policy);

    collect_issues(entries, &timeline, &gaps, &coverage)
}
