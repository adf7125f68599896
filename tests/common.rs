#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use workhours::db::EntryStore;

/// Binary under test, with HOME pointed at an empty directory so a user
/// config file never leaks into the run.
pub fn wh(home: &tempfile::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("workhours");
    cmd.env("HOME", home.path());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, initialized store backed by a temp file.
pub fn fresh_store(name: &str) -> EntryStore {
    let store = EntryStore::new(setup_test_db(name));
    store.init().expect("init store");
    store
}

/// Initialize DB through the CLI and add a small dataset
pub fn init_db_with_data(home: &tempfile::TempDir, db_path: &str) {
    wh(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, start, end) in [
        ("2024-03-11", "09:00", "17:00"),
        ("2024-03-12", "08:30", "17:30"),
        ("2024-03-15", "09:00", "13:00"),
    ] {
        wh(home)
            .args(["--db", db_path, "add", date, start, end])
            .assert()
            .success();
    }
}
