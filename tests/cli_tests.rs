use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_REPORT, init_db_with_sample, setup_test_db, sheet, temp_out, temp_report};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    sheet()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_import_from_stdin_reports_shift() {
    let db_path = setup_test_db("cli_import_stdin");

    sheet()
        .args(["--db", &db_path, "import"])
        .write_stdin(SAMPLE_REPORT)
        .assert()
        .success()
        .stdout(contains("Added 4 rows. Shift: B"))
        .stdout(contains("05 October 2025"));
}

#[test]
fn test_import_from_file() {
    let db_path = setup_test_db("cli_import_file");
    let report = temp_report("cli_import_file", SAMPLE_REPORT);

    sheet()
        .args(["--db", &db_path, "import", "--file", &report])
        .assert()
        .success()
        .stdout(contains("Added 4 rows"));

    sheet()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Standby malam"))
        .stdout(contains("Trucking"))
        .stdout(contains("Total: 9.00 h (4 rows)"));
}

#[test]
fn test_import_dry_run_saves_nothing() {
    let db_path = setup_test_db("cli_import_dry");

    sheet()
        .args(["--db", &db_path, "import", "--dry-run"])
        .write_stdin(SAMPLE_REPORT)
        .assert()
        .success()
        .stdout(contains("Patrol check jalur bongkar"))
        .stdout(contains("Dry run"));

    sheet()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records yet"));
}

#[test]
fn test_import_empty_input_warns() {
    let db_path = setup_test_db("cli_import_empty");

    sheet()
        .args(["--db", &db_path, "import"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(contains("Paste a report first"));
}

#[test]
fn test_import_without_activities_warns() {
    let db_path = setup_test_db("cli_import_none");

    sheet()
        .args(["--db", &db_path, "import"])
        .write_stdin("05 oktober 2025\nShift B\n16.00 sebelum jalur\ncatatan saja")
        .assert()
        .success()
        .stdout(contains("No valid activities found"))
        .stdout(contains("Added").not());
}

#[test]
fn test_lane_import_uses_given_date_and_lane() {
    let db_path = setup_test_db("cli_lane");

    sheet()
        .args([
            "--db",
            &db_path,
            "lane",
            "--date",
            "07 October 2025",
            "--lane",
            "trucking",
            "--shift",
            "A",
        ])
        .write_stdin("08.00-09.30 Antri timbangan\n09.30 Bongkar muatan")
        .assert()
        .success()
        .stdout(contains("Added 2 rows. Shift: A"));

    sheet()
        .args(["--db", &db_path, "list", "--date", "07 October 2025"])
        .assert()
        .success()
        .stdout(contains("Antri timbangan"))
        .stdout(contains("Trucking"))
        .stdout(contains("1.50"));
}

#[test]
fn test_lane_import_rejects_unknown_lane() {
    let db_path = setup_test_db("cli_lane_bad");

    sheet()
        .args(["--db", &db_path, "lane", "--date", "x", "--lane", "C"])
        .write_stdin("08.00 Cek")
        .assert()
        .failure()
        .stderr(contains("Invalid lane"));
}

#[test]
fn test_del_by_date_with_force() {
    let db_path = setup_test_db("cli_del_date");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "del", "--force", "05 October 2025"])
        .assert()
        .success()
        .stdout(contains("deleted (4 rows)"));

    sheet()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records yet"));
}

#[test]
fn test_del_unknown_date_fails() {
    let db_path = setup_test_db("cli_del_unknown");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "del", "--force", "01 January 2000"])
        .assert()
        .failure()
        .stderr(contains("No records found for date 01 January 2000"));
}

#[test]
fn test_del_all_asks_confirmation() {
    let db_path = setup_test_db("cli_del_all");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "del", "--all"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    sheet()
        .args(["--db", &db_path, "del", "--all"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All records deleted (4 rows)"));
}

#[test]
fn test_export_csv_excluding_keyword() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_sample(&db_path);
    let out = temp_out("cli_export_csv", "csv");

    sheet()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--exclude", "BONGKAR",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,shift,lane,start_time,end_time,description,duration_hours"));
    assert!(content.contains("Standby malam"));
    assert!(content.contains("Istirahat"));
    assert!(!content.to_lowercase().contains("bongkar"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_json_all() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_sample(&db_path);
    let out = temp_out("cli_export_json", "json");

    sheet()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["lane"], "A");
    assert_eq!(rows[0]["start_time"], "16:00");
    assert_eq!(rows[2]["duration_hours"], 8.0);
}

#[test]
fn test_export_xlsx_appends_extension() {
    let db_path = setup_test_db("cli_export_xlsx");
    init_db_with_sample(&db_path);
    let out = temp_out("cli_export_xlsx", "xlsx");
    let without_ext = out.trim_end_matches(".xlsx").to_string();

    sheet()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &without_ext, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("xlsx written");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_store_warns() {
    let db_path = setup_test_db("cli_export_empty");
    let out = temp_out("cli_export_empty", "csv");

    sheet()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No records to export"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_pareto_excludes_keyword() {
    let db_path = setup_test_db("cli_pareto");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "pareto", "--exclude", "bongkar", "--by-lane"])
        .assert()
        .success()
        .stdout(contains("Standby malam"))
        .stdout(contains("Lane Trucking"))
        .stdout(contains("Patrol check").not());
}

#[test]
fn test_pareto_leaves_out_configured_keyword_by_default() {
    let db_path = setup_test_db("cli_pareto_default");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "pareto"])
        .assert()
        .success()
        .stdout(contains("without 'bongkar'"))
        .stdout(contains("Standby malam"))
        .stdout(contains("Patrol check").not());
}

#[test]
fn test_pareto_all_keeps_every_row() {
    let db_path = setup_test_db("cli_pareto_all");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "pareto", "--all"])
        .assert()
        .success()
        .stdout(contains("Patrol check jalur bongkar"))
        .stdout(contains("without").not());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_sample(&db_path);

    sheet()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Added 4 rows from report (shift B)"));
}
