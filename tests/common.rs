#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use wedplanner::db::pool::DbPool;

/// The binary, with its configuration directory isolated in the temp dir
/// so that a real `~/.wedplanner/wedplanner.conf` never leaks into tests.
pub fn wp() -> Command {
    let mut home = env::temp_dir();
    home.push("wedplanner_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("wedplanner");
    cmd.env("WEDPLANNER_HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wedplanner.sqlite", name));
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

/// Initialize the DB through the CLI (schema + default categories).
pub fn init_db(db_path: &str) {
    wp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh, migrated pool for library-level tests.
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open_initialized(&db_path).expect("open test db")
}

/// Initialize the DB and add a small guest list with two tables:
/// Anna and Marco at "Table 1", Luca at "Family", Sara unassigned.
pub fn init_db_with_guests(db_path: &str) {
    init_db(db_path);

    for (name, cat) in [
        ("Anna", "Family"),
        ("Marco", "Friends"),
        ("Luca", "Family"),
        ("Sara", "Colleagues"),
    ] {
        wp().args(["--db", db_path, "guest", "add", name, "--category", cat])
            .assert()
            .success();
    }

    for table in ["Table 1", "Family"] {
        wp().args(["--db", db_path, "table", "add", table])
            .assert()
            .success();
    }

    // ids follow insertion order on a fresh DB
    for (guest, table) in [("1", "1"), ("2", "1"), ("3", "2")] {
        wp().args(["--db", db_path, "table", "assign", guest, table])
            .assert()
            .success();
    }
}
