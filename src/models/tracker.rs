use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackerStatus {
    Active,
    Terminated,
}

impl TrackerStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TrackerStatus::Active => "active",
            TrackerStatus::Terminated => "terminated",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(TrackerStatus::Active),
            "terminated" => Some(TrackerStatus::Terminated),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TrackerStatus::Active)
    }
}

/// Onboarding record of one applicant; owns the stored employment entries.
#[derive(Debug, Clone, Serialize)]
pub struct Tracker {
    pub id: i64,
    pub name: String,
    pub status: TrackerStatus,
    pub created_at: String,
    pub updated_at: String,
}
