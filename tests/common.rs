#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhistory")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhistory.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temporary input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

pub fn init_db(db_path: &str) {
    rwh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_entry(db_path: &str, tracker: &str, employer: &str, from: &str, to: &str) {
    rwh()
        .args([
            "--db", db_path, "add", tracker, "--employer", employer, "--from", from, "--to", to,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a two-employer history with a 45 day gap:
///
/// - #0 Acme Freight   2022-03-01 → 2024-01-01
/// - #1 Blue Line      2020-01-01 → 2022-01-15  (gap before #0: 45 days)
pub fn init_db_with_data(db_path: &str, tracker: &str) {
    init_db(db_path);
    add_entry(db_path, tracker, "Acme Freight", "2022-03-01", "2024-01-01");
    add_entry(db_path, tracker, "Blue Line", "2020-01-01", "2022-01-15");
}
