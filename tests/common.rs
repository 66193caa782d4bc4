#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Report used across the CLI and library tests: three lanes, headers,
/// free-text notes and an activity before the first lane header.
pub const SAMPLE_REPORT: &str = "\
Laporan harian
05 oktober 2025
Shift B
07.00 Briefing sebelum jalur
Jalur A
16.00-16.15 Patrol check jalur bongkar
16.20 Istirahat
catatan: semua aman

Jalur B
22.00-06.00 Standby malam
Mode Trucking
17:00 - 17:45 Loading truk
";

pub fn sheet() -> Command {
    cargo_bin_cmd!("shiftsheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsheet.sqlite", name));
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

/// Write `content` to a temp report file and return its path
pub fn temp_report(name: &str, content: &str) -> String {
    let p = temp_out(name, "txt");
    fs::write(&p, content).expect("write report file");
    p
}

/// Initialize DB and import the sample report
pub fn init_db_with_sample(db_path: &str) {
    sheet()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    sheet()
        .args(["--db", db_path, "import"])
        .write_stdin(SAMPLE_REPORT)
        .assert()
        .success();
}
