use mjournal::config::Config;
use mjournal::errors::AppError;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{mj, setup_test_db};

/// Fresh directory under the system temp dir
fn temp_dir(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("{}_mjournal_cfg", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let dir = temp_dir("config_defaults");
    let file = dir.join("mjournal.conf");
    fs::write(&file, "database: /tmp/journal.sqlite\ndashboard_limit: 3\n").unwrap();

    let cfg = Config::load_from(&file).expect("valid config");
    assert_eq!(cfg.database, "/tmp/journal.sqlite");
    assert_eq!(cfg.dashboard_limit, 3);
    assert_eq!(cfg.summary_horizon_days, 14);
    assert_eq!(cfg.date_format, "%Y-%m-%d %H:%M");
}

#[test]
fn test_unknown_date_specifier_is_rejected() {
    let dir = temp_dir("config_bad_format");
    let file = dir.join("mjournal.conf");
    fs::write(&file, "database: /tmp/journal.sqlite\ndate_format: \"%Q\"\n").unwrap();

    let err = Config::load_from(&file).unwrap_err();
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("date_format")));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[cfg(not(windows))]
#[test]
fn test_bad_date_format_fails_before_writing() {
    let home = temp_dir("config_bad_home");
    let db_path = setup_test_db("config_bad_home");
    fs::create_dir_all(home.join(".mjournal")).unwrap();
    fs::write(
        home.join(".mjournal").join("mjournal.conf"),
        format!("database: {}\ndate_format: \"%Q\"\n", db_path),
    )
    .unwrap();

    mj().env("HOME", &home)
        .args(["event", "add", "1", "--type", "1", "--date", "2024-01-01"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid date_format"))
        .stderr(contains("panicked").not());

    assert!(!PathBuf::from(&db_path).exists());
}
