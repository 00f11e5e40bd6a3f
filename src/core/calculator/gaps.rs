//! Module responsible for finding uncovered periods between adjacent
//! employment entries.
//!
//! A gap is attributed to the **older** entry of the pair: that entry's
//! `gap_explanation_before` is the field that must be filled in.

use crate::core::calculator::timeline::Timeline;
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_GAP_THRESHOLD_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// Index of the older entry
    pub index: usize,
    pub days: i64,
    /// End of the older entry
    pub from: NaiveDate,
    /// Start of the next more recent entry
    pub to: NaiveDate,
}

/// Gaps of at least 30 days.
pub fn get_gaps(timeline: &Timeline) -> Vec<Gap> {
    find_gaps(timeline, DEFAULT_GAP_THRESHOLD_DAYS)
}

pub fn find_gaps(timeline: &Timeline, threshold_days: i64) -> Vec<Gap> {
    let mut gaps = Vec::new();

    for w in timeline.segments.windows(2) {
        let newer = &w[0];
        let older = &w[1];

        // no bridging across malformed entries
        if !newer.is_counted() || !older.is_counted() {
            continue;
        }

        if let (Some(start), Some(end)) = (older.to, newer.from) {
            let days = (end - start).num_days();

            // overlapping or touching ranges are never a gap
            if days > 0 && days >= threshold_days {
                gaps.push(Gap {
                    index: older.index,
                    days,
                    from: start,
                    to: end,
                });
            }
        }
    }

    gaps
}
