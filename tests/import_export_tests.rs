use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, rwh, setup_test_db, temp_input, temp_out};

const FORM_JSON: &str = r#"{
  "employments": [
    {
      "employerName": "Acme Freight",
      "jobTitle": "Driver",
      "from": "2022-03-01T00:00:00.000Z",
      "to": "2024-01-01T00:00:00.000Z",
      "reasonForLeaving": "",
      "subjectToFmcsr": true,
      "safetySensitive": true
    },
    {
      "employerName": "Blue Line",
      "jobTitle": "Yard hostler",
      "from": "2020-01-01",
      "to": "2022-01-15",
      "gapExplanationBefore": "Family leave",
      "reasonForLeaving": "Relocated"
    }
  ]
}"#;

const FORM_CSV: &str = "employerName,jobTitle,from,to,gapExplanationBefore,reasonForLeaving,subjectToFmcsr,safetySensitive
Acme Freight,Driver,2022-03-01,2024-01-01,,,yes,yes
Blue Line,Yard hostler,2020-01-01,2022-01-15,,Relocated,no,no
";

/// Number of timeline rows in a JSON export of the whole database
fn exported_rows(db_path: &str, name: &str) -> usize {
    let out = temp_out(name, "json");

    rwh()
        .args([
            "--db", db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    rows.as_array().map(|a| a.len()).unwrap_or(0)
}

#[test]
fn test_import_json_then_check() {
    let db_path = setup_test_db("import_json_check");
    init_db(&db_path);
    let input = temp_input("import_json_check", "json", FORM_JSON);

    rwh()
        .args(["--db", &db_path, "import", "uma", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries into 'uma'."));

    // gap is explained in the form, only the ten-year warning remains
    rwh()
        .args(["--db", &db_path, "check", "uma"])
        .assert()
        .success()
        .stdout(contains("No blocking issues"));
}

#[test]
fn test_import_csv_append_and_replace() {
    let db_path = setup_test_db("import_csv_replace");
    init_db(&db_path);
    let input = temp_input("import_csv_replace", "csv", FORM_CSV);

    rwh()
        .args(["--db", &db_path, "import", "vic", "--file", &input])
        .assert()
        .success();

    rwh()
        .args(["--db", &db_path, "import", "vic", "--file", &input])
        .assert()
        .success();

    assert_eq!(exported_rows(&db_path, "import_csv_append"), 4);

    rwh()
        .args(["--db", &db_path, "import", "vic", "--file", &input, "--replace"])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    assert_eq!(exported_rows(&db_path, "import_csv_replaced"), 2);

    rwh()
        .args(["--db", &db_path, "check", "vic"])
        .assert()
        .code(1)
        .stdout(contains("entry #1: 45 day gap"));
}

#[test]
fn test_import_missing_file_fails() {
    let db_path = setup_test_db("import_missing_file");
    init_db(&db_path);

    rwh()
        .args([
            "--db",
            &db_path,
            "import",
            "walt",
            "--file",
            "/definitely/not/here.json",
        ])
        .assert()
        .failure()
        .stderr(contains("file not found"));
}

#[test]
fn test_import_bad_flag_reports_line() {
    let db_path = setup_test_db("import_bad_flag");
    init_db(&db_path);
    let input = temp_input(
        "import_bad_flag",
        "csv",
        "employerName,from,to,subjectToFmcsr\nAcme,2020-01-01,2022-01-01,sometimes\n",
    );

    rwh()
        .args(["--db", &db_path, "import", "xena", "--file", &input])
        .assert()
        .failure()
        .stderr(contains("line 2"));
}

#[test]
fn test_check_file_without_database() {
    let input = temp_input("check_file_csv", "csv", FORM_CSV);

    rwh()
        .args(["check", "--file", &input])
        .assert()
        .code(1)
        .stdout(contains("Blue Line"))
        .stdout(contains("45 day gap"));

    let explained = temp_input("check_file_json", "json", FORM_JSON);

    rwh()
        .args(["check", "--file", &explained, "--json"])
        .assert()
        .success()
        .stdout(contains("\"blocking\": false"))
        .stdout(contains("\"status\": \"partial\""));
}

#[test]
fn test_check_file_with_null_end_date() {
    let input = temp_input(
        "check_file_null_to",
        "json",
        r#"{"employments":[{"employerName":"Acme Freight","from":"2022-03-01","to":null}]}"#,
    );

    rwh()
        .args(["check", "--file", &input])
        .assert()
        .code(1)
        .stdout(contains("Acme Freight"))
        .stdout(contains("missing_dates"))
        .stdout(contains("entry #0: start and end dates are required"));
}

#[test]
fn test_check_file_with_explicit_format() {
    // .txt extension would be read as JSON
    let input = temp_input("check_file_format", "txt", FORM_CSV);

    rwh()
        .args(["check", "--file", &input, "--format", "csv"])
        .assert()
        .code(1)
        .stdout(contains("Acme Freight"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path, "yara");
    let out = temp_out("export_csv", "csv");

    rwh()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "tracker,tracker_status,index,role,employer,job_title,from,to,duration_days,duration_months,status,gap_before_days,gap_explained"
        )
    );
    assert_eq!(
        lines.next(),
        Some("yara,active,0,current,Acme Freight,,2022-03-01,2024-01-01,671,22,valid,,false")
    );
    assert_eq!(
        lines.next(),
        Some("yara,active,1,previous,Blue Line,,2020-01-01,2022-01-15,745,24,valid,45,false")
    );
}

#[test]
fn test_export_json_single_tracker() {
    let db_path = setup_test_db("export_json_single");
    init_db_with_data(&db_path, "zack");
    init_db_with_data(&db_path, "zoe");
    let out = temp_out("export_json_single", "json");

    rwh()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--tracker", "zoe",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["tracker"] == "zoe"));
    assert_eq!(rows[1]["gap_before_days"], 45);
    assert_eq!(rows[0]["gap_before_days"], serde_json::Value::Null);
}

#[test]
fn test_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path, "abel");
    let out = temp_out("export_xlsx", "xlsx");

    rwh()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_existing_file_declined() {
    let db_path = setup_test_db("export_existing_declined");
    init_db_with_data(&db_path, "beth");
    let out = temp_out("export_existing_declined", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_empty_database() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "csv");

    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No employment entries found to export."))
        .stdout(contains("export completed").not());
}

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path, "cleo");
    let out = temp_out("backup_plain", "sqlite");

    rwh()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let trackers: i64 = conn
        .query_row("SELECT COUNT(*) FROM trackers", [], |row| row.get(0))
        .expect("count trackers");
    assert_eq!(trackers, 1);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&db_path, "dora");
    let out = temp_out("backup_compressed", "sqlite");
    let archive = format!("{}.tar.gz", out);
    fs::remove_file(&archive).ok();

    rwh()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    assert!(std::path::Path::new(&archive).exists());
    assert!(!std::path::Path::new(&out).exists());
}
