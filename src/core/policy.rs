use crate::config::Config;
use crate::core::calculator::gaps::DEFAULT_GAP_THRESHOLD_DAYS;

/// Two years.
pub const MIN_HISTORY_DAYS: i64 = 730;
/// Ten years.
pub const FULL_HISTORY_DAYS: i64 = 3650;

/// Thresholds used by gap detection, coverage and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    pub gap_threshold_days: i64,
    pub min_history_days: i64,
    pub full_history_days: i64,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            gap_threshold_days: DEFAULT_GAP_THRESHOLD_DAYS,
            min_history_days: MIN_HISTORY_DAYS,
            full_history_days: FULL_HISTORY_DAYS,
        }
    }
}

impl HistoryPolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            gap_threshold_days: cfg.gap_threshold_days.max(1),
            min_history_days: cfg.min_history_days,
            full_history_days: cfg.full_history_days.max(cfg.min_history_days),
        }
    }
}
