use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, init_db_with_world, rtl, setup_test_db};

#[test]
fn test_window_last_seven_days() {
    let db_path = setup_test_db("window_last_seven_days");
    init_db_with_world(&db_path, "aethel");

    // known_max_seconds follows the latest event
    add_event(&db_path, "aethel", "Latest event", 1_000_000);

    rtl()
        .args(["--db", &db_path, "--test", "window", "aethel", "--last", "7d"])
        .assert()
        .success()
        .stdout(contains("[395200 .. 1000000]"));
}

#[test]
fn test_window_clamp_against_selection() {
    let db_path = setup_test_db("window_clamp_selection");
    init_db_with_world(&db_path, "aethel");

    add_event(&db_path, "aethel", "Earliest", 300);
    add_event(&db_path, "aethel", "Latest", 900);

    // requested window [500 .. 600] excludes both selected events:
    // start widens to 300-1000, end widens to 900+1000; --min-span 0
    // disables the minimum-span stretch so the clamp result stays visible
    rtl()
        .args([
            "--db",
            &db_path,
            "--test",
            "window",
            "aethel",
            "--from",
            "500",
            "--to",
            "600",
            "--clamp-selection",
            "--min-span",
            "0",
        ])
        .assert()
        .success()
        .stdout(
            contains("[-700 .. 1900]")
                .and(contains("widened"))
                .and(contains("500"))
                .and(contains("600")),
        );
}

#[test]
fn test_window_no_clamp_when_selection_inside() {
    let db_path = setup_test_db("window_no_clamp_inside");
    init_db_with_world(&db_path, "aethel");

    add_event(&db_path, "aethel", "Inside", 500_000);

    rtl()
        .args([
            "--db",
            &db_path,
            "--test",
            "window",
            "aethel",
            "--from",
            "0",
            "--to",
            "1000000",
            "--clamp-selection",
        ])
        .assert()
        .success()
        .stdout(contains("[0 .. 1000000]"));
}

#[test]
fn test_window_minimum_span() {
    let db_path = setup_test_db("window_minimum_span");
    init_db_with_world(&db_path, "aethel");

    rtl()
        .args([
            "--db", &db_path, "--test", "window", "aethel", "--from", "0", "--to", "3600",
        ])
        .assert()
        .success()
        .stdout(contains("[0 .. 86400]"));
}

#[test]
fn test_window_unlimited() {
    let db_path = setup_test_db("window_unlimited");
    init_db_with_world(&db_path, "aethel");

    rtl()
        .args(["--db", &db_path, "--test", "window", "aethel", "--unlimited"])
        .assert()
        .success()
        .stdout(contains("Window: unlimited"));
}

#[test]
fn test_window_renders_calendar_bounds() {
    let db_path = setup_test_db("window_renders_bounds");
    init_db_with_world(&db_path, "aethel");

    rtl()
        .args([
            "--db",
            &db_path,
            "--test",
            "window",
            "aethel",
            "--from",
            "0",
            "--to",
            "31104000",
        ])
        .assert()
        .success()
        .stdout(
            contains("start: AD 0-1-1")
                .and(contains("end:   AD 1-1-1"))
                .and(contains("span:  1y")),
        );
}

#[test]
fn test_list_applies_window_and_orders_descending() {
    let db_path = setup_test_db("list_applies_window");
    init_db_with_world(&db_path, "aethel");

    add_event(&db_path, "aethel", "Too early", 10);
    add_event(&db_path, "aethel", "In range old", 50);
    add_event(&db_path, "aethel", "In range new", 90);

    let out = rtl()
        .args([
            "--db", &db_path, "--test", "list", "aethel", "--from", "20", "--to", "90",
        ])
        .output()
        .expect("run list");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();

    assert!(!stdout.contains("Too early"));
    let newer = stdout.find("In range new").expect("new event listed");
    let older = stdout.find("In range old").expect("old event listed");
    assert!(newer < older, "events must be listed newest-first");
}

#[test]
fn test_list_dense_window_advisory() {
    let db_path = setup_test_db("list_dense_window");
    init_db_with_world(&db_path, "aethel");

    for i in 0..11 {
        add_event(&db_path, "aethel", &format!("Event {}", i), i * 1000);
    }

    rtl()
        .args(["--db", &db_path, "--test", "list", "aethel", "--unlimited"])
        .assert()
        .success()
        .stdout(contains("consider narrowing").and(contains("11 event(s)")));
}
