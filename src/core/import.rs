//! Loading employment entries from an onboarding form export.
//!
//! Supported:
//! - JSON: `[ {...}, ... ]` or `{ "employments": [ {...}, ... ] }`
//! - CSV : header `employerName,jobTitle,from,to,gapExplanationBefore,
//!   reasonForLeaving,subjectToFmcsr,safetySensitive` (missing columns → empty)

use crate::core::add::ensure_editable;
use crate::db::log::whlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{get_or_create_tracker, store_employments};
use crate::errors::{AppError, AppResult};
use crate::models::employment::EmploymentEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Guess from the file extension, JSON otherwise.
    pub fn detect(path: &Path) -> Self {
        match path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ImportFormat::Csv,
            _ => ImportFormat::Json,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<EmploymentEntry>),
    Wrapped { employments: Vec<EmploymentEntry> },
}

/// Flat CSV row: every cell is text, booleans are parsed leniently.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CsvRow {
    employer_name: String,
    job_title: String,
    from: String,
    to: String,
    gap_explanation_before: String,
    reason_for_leaving: String,
    subject_to_fmcsr: String,
    safety_sensitive: String,
}

fn parse_flag(value: &str, line: usize) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" | "x" => Ok(true),
        other => Err(AppError::Import(format!(
            "line {}: '{}' is not a yes/no value",
            line, other
        ))),
    }
}

impl CsvRow {
    fn into_entry(self, line: usize) -> AppResult<EmploymentEntry> {
        let explanation = self.gap_explanation_before.trim().to_string();

        Ok(EmploymentEntry {
            employer_name: self.employer_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
            gap_explanation_before: if explanation.is_empty() {
                None
            } else {
                Some(explanation)
            },
            reason_for_leaving: self.reason_for_leaving.trim().to_string(),
            subject_to_fmcsr: parse_flag(&self.subject_to_fmcsr, line)?,
            safety_sensitive: parse_flag(&self.safety_sensitive, line)?,
        })
    }
}

pub fn parse_json(content: &str) -> AppResult<Vec<EmploymentEntry>> {
    let doc: JsonDocument = serde_json::from_str(content)?;
    Ok(match doc {
        JsonDocument::List(v) => v,
        JsonDocument::Wrapped { employments } => employments,
    })
}

pub fn parse_csv(content: &str) -> AppResult<Vec<EmploymentEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // header is line 1
        out.push(row?.into_entry(i + 2)?);
    }
    Ok(out)
}

/// Read entries from a file, detecting the format when not given.
pub fn read_entries(file: &str, format: Option<ImportFormat>) -> AppResult<Vec<EmploymentEntry>> {
    let path = expand_tilde(file);

    if !path.exists() {
        return Err(AppError::Import(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)?;
    let format = format.unwrap_or_else(|| ImportFormat::detect(&path));

    match format {
        ImportFormat::Json => parse_json(&content),
        ImportFormat::Csv => parse_csv(&content),
    }
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import(
        pool: &mut DbPool,
        tracker_name: &str,
        file: &str,
        format: Option<ImportFormat>,
        replace: bool,
    ) -> AppResult<usize> {
        info(format!("Importing employment history from {}", file));

        let entries = read_entries(file, format)?;

        if entries.is_empty() {
            warning("No employment entries found in file.");
            return Ok(0);
        }

        let tracker = get_or_create_tracker(&pool.conn, tracker_name)?;
        ensure_editable(&tracker)?;

        let n = store_employments(&pool.conn, tracker.id, &entries, replace)?;

        whlog_quiet(
            &pool.conn,
            "import",
            tracker_name,
            &format!(
                "Imported {} entr{} from {}{}",
                n,
                if n == 1 { "y" } else { "ies" },
                file,
                if replace { " (replace)" } else { "" }
            ),
        );
        success(format!("Imported {} entries into '{}'.", n, tracker_name));

        Ok(n)
    }
}
