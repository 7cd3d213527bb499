use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_event, init_db_with_world, rtl, setup_test_db, temp_out};

fn seed(db_path: &str) {
    init_db_with_world(db_path, "aethel");
    add_event(db_path, "aethel", "Founding", 0);
    add_event(db_path, "aethel", "Coronation", 31_104_000);
    add_event(db_path, "aethel", "Fall of the wall", 93_312_000);
}

#[test]
fn test_export_csv_all_events() {
    let db_path = setup_test_db("export_csv_all");
    seed(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,world,title,seconds,world_date,source,created_at"));
    assert!(content.contains("Coronation"));
    assert!(content.contains("AD 1-1-1"));
}

#[test]
fn test_export_json_contains_world_dates() {
    let db_path = setup_test_db("export_json");
    seed(&db_path);

    let out = temp_out("export_json", "json");

    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"title\": \"Fall of the wall\""));
    assert!(content.contains("\"world_date\": \"AD 3-1-1\""));
}

#[test]
fn test_export_window_filters_rows() {
    let db_path = setup_test_db("export_window_filters");
    seed(&db_path);

    let out = temp_out("export_window_filters", "csv");

    rtl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--from",
            "1",
            "--to",
            "40000000",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Coronation"));
    assert!(!content.contains("Founding"));
    assert!(!content.contains("Fall of the wall"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    seed(&db_path);

    rtl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_unknown_world_fails() {
    let db_path = setup_test_db("export_unknown_world");
    seed(&db_path);

    let out = temp_out("export_unknown_world", "csv");

    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--world",
            "atlantis", "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("No such world"));
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let db_path = setup_test_db("export_xlsx_pdf");
    seed(&db_path);

    let xlsx = temp_out("export_xlsx_pdf", "xlsx");
    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "xlsx", "--file", &xlsx, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_xlsx_pdf", "pdf");
    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "pdf", "--file", &pdf, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));
    assert!(fs::metadata(&pdf).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_export_identity_format_without_calendar() {
    let db_path = setup_test_db("export_identity_format");

    rtl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtl()
        .args(["--db", &db_path, "--test", "world", "--add", "limbo"])
        .assert()
        .success();

    add_event(&db_path, "limbo", "Unanchored event", 777);

    let out = temp_out("export_identity_format", "csv");

    rtl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("timepoint: 777"));
}
