use crate::core::calculator::coverage::Coverage;
use crate::core::calculator::gaps::Gap;
use crate::core::calculator::timeline::Timeline;
use crate::core::validate::{Severity, ValidationIssue};

/// Everything the UI and the submit-time check need for one history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub timeline: Timeline,
    pub gaps: Vec<Gap>,
    pub coverage: Coverage,
    pub issues: Vec<ValidationIssue>,
}

impl HistorySummary {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn is_blocking(&self) -> bool {
        self.error_count() > 0
    }

    /// The gap attributed to entry `index`, if any.
    pub fn gap_before(&self, index: usize) -> Option<&Gap> {
        self.gaps.iter().find(|g| g.index == index)
    }
}
