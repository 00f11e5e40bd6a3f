//! Per-entry durations and cumulative totals for an employment history.

use crate::models::employment::EmploymentEntry;
use crate::utils::date::months_between;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    Current,
    Previous,
}

impl SegmentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentRole::Current => "current",
            SegmentRole::Previous => "previous",
        }
    }
}

/// Why a segment does (not) count towards the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStatus {
    Valid,
    /// `from` or `to` left empty
    MissingDates,
    /// `from` or `to` present but not a date
    InvalidDate,
    /// `from` after `to`
    Inverted,
}

impl SegmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentStatus::Valid => "valid",
            SegmentStatus::MissingDates => "missing_dates",
            SegmentStatus::InvalidDate => "invalid_date",
            SegmentStatus::Inverted => "inverted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSegment {
    pub index: usize,
    pub role: SegmentRole,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub duration_days: i64,
    pub duration_months: i64,
    pub status: SegmentStatus,
}

impl TimelineSegment {
    pub fn is_counted(&self) -> bool {
        self.status == SegmentStatus::Valid
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub segments: Vec<TimelineSegment>,
    pub total_days: i64,
    pub total_months: i64,
}

impl Timeline {
    pub fn counted_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.is_counted()).count()
    }
}

pub fn calculate_timeline(employments: &[EmploymentEntry]) -> Timeline {
    let mut segments = Vec::with_capacity(employments.len());
    let mut total_days = 0;
    let mut total_months = 0;

    for (index, entry) in employments.iter().enumerate() {
        let role = if index == 0 {
            SegmentRole::Current
        } else {
            SegmentRole::Previous
        };

        let segment = build_segment(index, role, entry);

        total_days += segment.duration_days;
        total_months += segment.duration_months;
        segments.push(segment);
    }

    Timeline {
        segments,
        total_days,
        total_months,
    }
}

fn build_segment(index: usize, role: SegmentRole, entry: &EmploymentEntry) -> TimelineSegment {
    let from = entry.from_date();
    let to = entry.to_date();

    let status = if entry.from.trim().is_empty() || entry.to.trim().is_empty() {
        SegmentStatus::MissingDates
    } else {
        match (from, to) {
            (Some(f), Some(t)) if f <= t => SegmentStatus::Valid,
            (Some(_), Some(_)) => SegmentStatus::Inverted,
            _ => SegmentStatus::InvalidDate,
        }
    };

    let (duration_days, duration_months) = match (status, from, to) {
        (SegmentStatus::Valid, Some(f), Some(t)) => ((t - f).num_days(), months_between(f, t)),
        _ => (0, 0),
    };

    TimelineSegment {
        index,
        role,
        from,
        to,
        duration_days,
        duration_months,
        status,
    }
}
