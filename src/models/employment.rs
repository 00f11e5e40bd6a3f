use crate::utils::date::parse_form_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One employer in an applicant's history.
///
/// Lists of entries are ordered newest first: index 0 is the current
/// employer, higher indices are progressively older employers.
///
/// `from` / `to` are kept as the raw strings submitted by the onboarding
/// form: an empty or malformed date is a display state, not a load error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub employer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
    /// Explanation for the gap between this (older) entry and the next
    /// more recent one.
    #[serde(default)]
    pub gap_explanation_before: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason_for_leaving: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_to_fmcsr: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub safety_sensitive: bool,
}

/// Form documents store unset fields as `null` (e.g. `to` of the current
/// employer); read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmploymentEntry {
    pub fn new(employer_name: &str, from: &str, to: &str) -> Self {
        Self {
            employer_name: employer_name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            ..Default::default()
        }
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.from)
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.to)
    }

    /// True when a non-blank gap explanation is present.
    pub fn has_gap_explanation(&self) -> bool {
        self.gap_explanation_before
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    pub fn display_name(&self) -> &str {
        if self.employer_name.trim().is_empty() {
            "(unnamed employer)"
        } else {
            self.employer_name.as_str()
        }
    }
}

/// An entry as persisted in the `employments` table.
#[derive(Debug, Clone)]
pub struct EmploymentRecord {
    pub id: i64,
    pub tracker_id: i64,
    pub position: usize, // ⇔ employments.position (timeline index)
    pub entry: EmploymentEntry,
    pub created_at: String,
}

/// Partial update for an existing entry (`add --edit`).
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct EmploymentPatch {
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub gap_explanation_before: Option<String>,
    pub reason_for_leaving: Option<String>,
    pub subject_to_fmcsr: Option<bool>,
    pub safety_sensitive: Option<bool>,
}

impl EmploymentPatch {
    pub fn is_empty(&self) -> bool {
        self.employer_name.is_none()
            && self.job_title.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && self.gap_explanation_before.is_none()
            && self.reason_for_leaving.is_none()
            && self.subject_to_fmcsr.is_none()
            && self.safety_sensitive.is_none()
    }

    /// Apply the patch. An empty explanation string clears the explanation.
    pub fn apply_to(&self, entry: &mut EmploymentEntry) {
        if let Some(v) = &self.employer_name {
            entry.employer_name = v.clone();
        }
        if let Some(v) = &self.job_title {
            entry.job_title = v.clone();
        }
        if let Some(v) = &self.from {
            entry.from = v.clone();
        }
        if let Some(v) = &self.to {
            entry.to = v.clone();
        }
        if let Some(v) = &self.gap_explanation_before {
            entry.gap_explanation_before = if v.trim().is_empty() {
                None
            } else {
                Some(v.clone())
            };
        }
        if let Some(v) = &self.reason_for_leaving {
            entry.reason_for_leaving = v.clone();
        }
        if let Some(v) = self.subject_to_fmcsr {
            entry.subject_to_fmcsr = v;
        }
        if let Some(v) = self.safety_sensitive {
            entry.safety_sensitive = v;
        }
    }

    /// Build a fresh entry from the patch (used by plain `add`).
    pub fn into_entry(self) -> EmploymentEntry {
        let mut entry = EmploymentEntry::default();
        self.apply_to(&mut entry);
        entry
    }
}
