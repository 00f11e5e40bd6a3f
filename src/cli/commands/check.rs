use crate::cli::commands::list::print_timeline;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::coverage::Coverage;
use crate::core::calculator::gaps::Gap;
use crate::core::calculator::timeline::Timeline;
use crate::core::check::{CheckLogic, CheckedHistory};
use crate::core::validate::{Severity, ValidationIssue};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{RED, RESET, YELLOW};
use serde::Serialize;

#[derive(Serialize)]
struct CheckReport<'a> {
    subject: &'a str,
    blocking: bool,
    timeline: &'a Timeline,
    gaps: &'a [Gap],
    coverage: &'a Coverage,
    issues: &'a [ValidationIssue],
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        tracker,
        file,
        format,
        json,
    } = cmd
    {
        let checked = match (tracker, file) {
            (_, Some(f)) => CheckLogic::file(f, *format, cfg)?,
            (Some(name), None) => {
                let mut pool = DbPool::new(&cfg.database)?;
                CheckLogic::tracker(&mut pool, name, cfg)?
            }
            (None, None) => {
                return Err(AppError::Other(
                    "give a tracker name or --file".to_string(),
                ));
            }
        };

        if *json {
            print_json(&checked)?;
        } else {
            print_report(&checked, cfg);
        }

        let errors = checked.summary.error_count();
        if errors > 0 {
            return Err(AppError::Validation {
                subject: checked.subject,
                errors,
            });
        }
    }

    Ok(())
}

fn print_json(checked: &CheckedHistory) -> AppResult<()> {
    let s = &checked.summary;
    let report = CheckReport {
        subject: &checked.subject,
        blocking: s.is_blocking(),
        timeline: &s.timeline,
        gaps: &s.gaps,
        coverage: &s.coverage,
        issues: &s.issues,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report(checked: &CheckedHistory, cfg: &Config) {
    header(format!("Employment history check: {}", checked.subject));
    print_timeline(checked, cfg, false);
    println!();

    let s = &checked.summary;

    for issue in &s.issues {
        match issue.severity {
            Severity::Error => println!("{RED}✗{RESET} {}", issue),
            Severity::Warning => println!("{YELLOW}!{RESET} {}", issue),
        }
    }

    match (s.error_count(), s.warning_count()) {
        (0, 0) => success("Employment history is complete."),
        (0, w) => warning(format!("No blocking issues, {} warning(s).", w)),
        (e, _) => println!("\n{RED}{} blocking issue(s) found.{RESET}", e),
    }
}
