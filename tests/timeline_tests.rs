use chrono::NaiveDate;
use rworkhistory::config::Config;
use rworkhistory::core::calculator::coverage::{CoverageStatus, assess_coverage};
use rworkhistory::core::calculator::timeline::{SegmentRole, SegmentStatus};
use rworkhistory::core::calculator::{calculate_timeline, find_gaps, get_gaps};
use rworkhistory::core::import::{parse_csv, parse_json};
use rworkhistory::core::logic::Core;
use rworkhistory::core::policy::HistoryPolicy;
use rworkhistory::core::validate::{IssueKind, Severity, validate_history};
use rworkhistory::models::employment::EmploymentEntry;
use rworkhistory::utils::date::{months_between, parse_form_date};
use rworkhistory::utils::days2readable;

fn entry(name: &str, from: &str, to: &str) -> EmploymentEntry {
    EmploymentEntry::new(name, from, to)
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

#[test]
fn test_two_year_entry_is_731_days() {
    let tl = calculate_timeline(&[entry("Acme", "2020-01-01", "2022-01-01")]);

    assert_eq!(tl.segments.len(), 1);
    assert_eq!(tl.segments[0].duration_days, 731);
    assert_eq!(tl.segments[0].duration_months, 24);
    assert_eq!(tl.segments[0].role, SegmentRole::Current);
    assert_eq!(tl.total_days, 731);
    assert_eq!(tl.total_months, 24);
    assert_eq!(days2readable(tl.total_days, false), "2y 00m 01d");
}

#[test]
fn test_roles_follow_index() {
    let tl = calculate_timeline(&[
        entry("Acme", "2022-01-01", "2023-01-01"),
        entry("Blue Line", "2021-01-01", "2021-12-31"),
    ]);

    assert_eq!(tl.segments[0].role, SegmentRole::Current);
    assert_eq!(tl.segments[1].role, SegmentRole::Previous);
    assert_eq!(tl.total_days, 365 + 364);
}

#[test]
fn test_45_day_gap_is_attributed_to_older_entry() {
    let entries = [
        entry("Acme", "2022-03-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-15"),
    ];
    let gaps = get_gaps(&calculate_timeline(&entries));

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].index, 1);
    assert_eq!(gaps[0].days, 45);
    assert_eq!(gaps[0].from, d("2022-01-15"));
    assert_eq!(gaps[0].to, d("2022-03-01"));
}

#[test]
fn test_10_day_gap_is_ignored() {
    let entries = [
        entry("Acme", "2022-01-11", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-01"),
    ];

    assert!(get_gaps(&calculate_timeline(&entries)).is_empty());
}

#[test]
fn test_29_day_gap_is_ignored() {
    let entries = [
        entry("Acme", "2021-12-30", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2021-12-01"),
    ];

    assert!(get_gaps(&calculate_timeline(&entries)).is_empty());
}

#[test]
fn test_overlapping_entries_give_no_gap() {
    let entries = [
        entry("Acme", "2021-06-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2021-12-31"),
    ];
    let tl = calculate_timeline(&entries);

    assert!(get_gaps(&tl).is_empty());
    // even with a non-positive threshold
    assert!(find_gaps(&tl, 0).is_empty());
    assert!(find_gaps(&tl, -30).is_empty());
}

#[test]
fn test_policy_threshold_is_at_least_one_day() {
    let cfg = Config {
        gap_threshold_days: 0,
        ..Config::default()
    };
    let policy = HistoryPolicy::from_config(&cfg);
    assert_eq!(policy.gap_threshold_days, 1);

    let entries = [
        entry("Acme", "2021-06-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2021-12-31"),
    ];
    let issues = validate_history(&entries, &policy);
    assert!(
        !issues
            .iter()
            .any(|i| matches!(i.kind, IssueKind::UnexplainedGap { .. }))
    );
}

#[test]
fn test_30_day_gap_is_reported() {
    let entries = [
        entry("Acme", "2021-12-31", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2021-12-01"),
    ];
    let gaps = get_gaps(&calculate_timeline(&entries));

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].days, 30);
}

#[test]
fn test_custom_threshold() {
    let entries = [
        entry("Acme", "2022-01-11", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-01"),
    ];
    let tl = calculate_timeline(&entries);

    assert_eq!(find_gaps(&tl, 7).len(), 1);
    assert!(find_gaps(&tl, 11).is_empty());
}

#[test]
fn test_calculation_is_idempotent() {
    let entries = [
        entry("Acme", "2022-03-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-15"),
        entry("Broken", "yesterday", "2019-01-01"),
    ];

    let first = calculate_timeline(&entries);
    let second = calculate_timeline(&entries);
    assert_eq!(first, second);
    assert_eq!(get_gaps(&first), get_gaps(&second));

    let policy = HistoryPolicy::default();
    assert_eq!(
        Core::build_history_summary(&entries, &policy),
        Core::build_history_summary(&entries, &policy)
    );
}

#[test]
fn test_empty_dates_give_no_duration_and_no_gap() {
    let entries = [
        entry("Acme", "2023-01-01", "2024-01-01"),
        entry("Unknown", "", ""),
    ];
    let tl = calculate_timeline(&entries);

    assert_eq!(tl.segments[1].status, SegmentStatus::MissingDates);
    assert_eq!(tl.segments[1].duration_days, 0);
    assert_eq!(tl.segments[1].duration_months, 0);
    assert_eq!(tl.total_days, 365);
    assert!(get_gaps(&tl).is_empty());
}

#[test]
fn test_malformed_and_inverted_dates_count_zero() {
    let entries = [
        entry("Typo", "2023-13-45", "2024-01-01"),
        entry("Backwards", "2022-06-01", "2021-06-01"),
    ];
    let tl = calculate_timeline(&entries);

    assert_eq!(tl.segments[0].status, SegmentStatus::InvalidDate);
    assert_eq!(tl.segments[1].status, SegmentStatus::Inverted);
    assert_eq!(tl.total_days, 0);
    assert!(get_gaps(&tl).is_empty());
}

#[test]
fn test_no_gap_across_a_malformed_entry() {
    let entries = [
        entry("Acme", "2023-01-01", "2024-01-01"),
        entry("Broken", "n/a", "n/a"),
        entry("Old", "2015-01-01", "2016-01-01"),
    ];

    assert!(get_gaps(&calculate_timeline(&entries)).is_empty());
}

#[test]
fn test_form_date_formats() {
    assert_eq!(parse_form_date("2021-03-01"), Some(d("2021-03-01")));
    assert_eq!(
        parse_form_date("2021-03-01T00:00:00.000Z"),
        Some(d("2021-03-01"))
    );
    assert_eq!(parse_form_date("2021-03-01T10:30:00"), Some(d("2021-03-01")));
    assert_eq!(parse_form_date("03/15/2021"), Some(d("2021-03-15")));
    assert_eq!(parse_form_date(""), None);
    assert_eq!(parse_form_date("last spring"), None);
}

#[test]
fn test_months_between_counts_whole_months() {
    assert_eq!(months_between(d("2020-01-31"), d("2020-02-29")), 0);
    assert_eq!(months_between(d("2020-01-15"), d("2020-03-15")), 2);
    assert_eq!(months_between(d("2021-05-01"), d("2020-05-01")), 0);
}

#[test]
fn test_coverage_rules() {
    let policy = HistoryPolicy::default();

    let short = calculate_timeline(&[entry("Acme", "2023-01-01", "2023-07-01")]);
    let c = assess_coverage(&short, &policy);
    assert_eq!(c.status, CoverageStatus::Insufficient);
    assert_eq!(c.required_days, 730);
    assert_eq!(c.missing_days, 730 - 181);

    let single = calculate_timeline(&[entry("Acme", "2020-01-01", "2022-01-01")]);
    let c = assess_coverage(&single, &policy);
    assert_eq!(c.status, CoverageStatus::Complete);
    assert_eq!(c.missing_days, 0);

    let several = calculate_timeline(&[
        entry("Acme", "2022-03-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-15"),
    ]);
    let c = assess_coverage(&several, &policy);
    assert_eq!(c.status, CoverageStatus::Partial);
    assert_eq!(c.required_days, 3650);

    let long = calculate_timeline(&[
        entry("Acme", "2019-01-01", "2024-01-01"),
        entry("Blue Line", "2013-01-01", "2019-01-01"),
    ]);
    assert_eq!(
        assess_coverage(&long, &policy).status,
        CoverageStatus::Complete
    );
}

#[test]
fn test_validation_requires_gap_explanation() {
    let policy = HistoryPolicy::default();
    let mut entries = vec![
        entry("Acme", "2022-03-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-15"),
    ];

    let issues = validate_history(&entries, &policy);
    let gap = issues
        .iter()
        .find(|i| matches!(i.kind, IssueKind::UnexplainedGap { .. }))
        .expect("gap issue");
    assert_eq!(gap.index, Some(1));
    assert_eq!(gap.severity, Severity::Error);
    assert_eq!(
        gap.to_string(),
        "entry #1: 45 day gap before the next employer needs an explanation"
    );

    entries[1].gap_explanation_before = Some("Family leave".to_string());
    let issues = validate_history(&entries, &policy);
    assert!(
        !issues
            .iter()
            .any(|i| matches!(i.kind, IssueKind::UnexplainedGap { .. }))
    );
    // the remaining finding is the ten-year warning
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
}

#[test]
fn test_blank_explanation_does_not_count() {
    let policy = HistoryPolicy::default();
    let mut entries = vec![
        entry("Acme", "2022-03-01", "2024-01-01"),
        entry("Blue Line", "2020-01-01", "2022-01-15"),
    ];
    entries[1].gap_explanation_before = Some("   ".to_string());

    let summary = Core::build_history_summary(&entries, &policy);
    assert!(summary.is_blocking());
    assert_eq!(summary.gap_before(1).map(|g| g.days), Some(45));
}

#[test]
fn test_history_summary_counts() {
    let policy = HistoryPolicy::default();
    let entries = [entry("Acme", "", "2024-01-01")];

    let summary = Core::build_history_summary(&entries, &policy);
    // missing dates + insufficient history
    assert_eq!(summary.error_count(), 2);
    assert_eq!(summary.warning_count(), 0);
}

#[test]
fn test_parse_json_accepts_list_and_wrapper() {
    let list = r#"[{"employerName":"Acme","from":"2020-01-01","to":"2022-01-01","subjectToFmcsr":true}]"#;
    let wrapped = r#"{"employments":[{"employerName":"Acme","from":"2020-01-01T00:00:00.000Z","to":""}]}"#;

    let a = parse_json(list).expect("list");
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].employer_name, "Acme");
    assert!(a[0].subject_to_fmcsr);
    assert_eq!(a[0].gap_explanation_before, None);

    let b = parse_json(wrapped).expect("wrapper");
    assert_eq!(b[0].from_date(), Some(d("2020-01-01")));
    assert_eq!(b[0].to_date(), None);
}

#[test]
fn test_parse_json_null_fields_read_as_empty() {
    let doc = r#"[{"employerName":"Acme","jobTitle":null,"from":"2020-01-01","to":null,
                  "gapExplanationBefore":null,"reasonForLeaving":null,
                  "subjectToFmcsr":null,"safetySensitive":true}]"#;

    let entries = parse_json(doc).expect("null fields accepted");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].to, "");
    assert_eq!(entries[0].job_title, "");
    assert!(!entries[0].subject_to_fmcsr);
    assert!(entries[0].safety_sensitive);

    let tl = calculate_timeline(&entries);
    assert_eq!(tl.segments[0].status, SegmentStatus::MissingDates);
    assert_eq!(tl.total_days, 0);
}

#[test]
fn test_parse_csv_flags_and_missing_columns() {
    let csv = "employerName,from,to,gapExplanationBefore,subjectToFmcsr\n\
               Acme,2022-03-01,2024-01-01,,yes\n\
               Blue Line,2020-01-01,2022-01-15,School,no\n";

    let entries = parse_csv(csv).expect("csv");
    assert_eq!(entries.len(), 2);
    assert!(entries[0].subject_to_fmcsr);
    assert_eq!(entries[0].gap_explanation_before, None);
    assert!(!entries[1].subject_to_fmcsr);
    assert!(entries[1].has_gap_explanation());
    assert_eq!(entries[1].job_title, "");

    let bad = "employerName,from,to,subjectToFmcsr\nAcme,2020-01-01,2021-01-01,maybe\n";
    assert!(parse_csv(bad).is_err());
}
