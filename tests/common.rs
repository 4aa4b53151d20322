#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mj() -> Command {
    cargo_bin_cmd!("mjournal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mjournal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mjournal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a command against `db_path` and require success.
pub fn run_ok(db_path: &str, args: &[&str]) {
    mj().arg("--db").arg(db_path).args(args).assert().success();
}

/// Initialize the DB without touching the user's config file
pub fn init(db_path: &str) {
    mj().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Root(1) › Printer(2), Cleaning(1) every 30 days on the printer,
/// cleaned on 2024-01-01.
pub fn init_db_with_printer(db_path: &str) {
    init(db_path);
    run_ok(db_path, &["object", "add", "Root"]);
    run_ok(db_path, &["object", "add", "Printer", "--parent", "1"]);
    run_ok(db_path, &["type", "add", "Cleaning"]);
    run_ok(db_path, &["link", "add", "2", "--type", "1", "--every", "30"]);
    run_ok(
        db_path,
        &[
            "event",
            "add",
            "2",
            "--type",
            "1",
            "--date",
            "2024-01-01",
            "--comment",
            "nozzles cleaned",
        ],
    );
}
