#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtimeline")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeline.sqlite", name));
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

/// Initialize DB and create a world with the default-style calendar
pub fn init_db_with_world(db_path: &str, world: &str) {
    // init DB (creates tables)
    rtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtl()
        .args([
            "--db",
            db_path,
            "--test",
            "world",
            "--add",
            world,
            "--epoch",
            "Imperial Era",
            "--seconds-per-hour",
            "3600",
            "--hours-per-day",
            "24",
            "--days-per-month",
            "30",
            "--months-per-year",
            "12",
        ])
        .assert()
        .success();
}

/// Add an event via the CLI
pub fn add_event(db_path: &str, world: &str, title: &str, at: i64) {
    rtl()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            world,
            title,
            "--at",
            &at.to_string(),
        ])
        .assert()
        .success();
}
