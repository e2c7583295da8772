use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_guests, setup_test_db, temp_out, wp};

#[test]
fn test_init_seeds_default_categories() {
    let db_path = setup_test_db("cli_init_categories");

    wp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    wp().args(["--db", &db_path, "category", "list"])
        .assert()
        .success()
        .stdout(contains("Family"))
        .stdout(contains("Friends"))
        .stdout(contains("Colleagues"));
}

#[test]
fn test_event_add_derives_end_and_duration() {
    let db_path = setup_test_db("cli_event_add");
    init_db(&db_path);

    wp().args(["--db", &db_path, "project", "add", "Our wedding"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "event", "add", "--start", "23:00", "--end", "01:00", "--title",
        "After party",
    ])
    .assert()
    .success()
    .stdout(contains("2h 0m"));

    wp().args([
        "--db",
        &db_path,
        "event",
        "add",
        "--start",
        "09:00",
        "--duration",
        "90",
        "--title",
        "Hair & make-up",
        "--category",
        "setup",
    ])
    .assert()
    .success()
    .stdout(contains("10:30"));

    wp().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(contains("Hair & make-up"))
        .stdout(contains("[Setup]"))
        .stdout(contains("1h 30m"))
        .stdout(contains("After party"));
}

#[test]
fn test_event_edit_accepts_one_slot_field_only() {
    let db_path = setup_test_db("cli_event_edit");
    init_db(&db_path);

    wp().args(["--db", &db_path, "project", "add", "Our wedding"])
        .assert()
        .success();
    wp().args([
        "--db", &db_path, "event", "add", "--start", "18:00", "--duration", "2h", "--title",
        "Dinner",
    ])
    .assert()
    .success();

    wp().args([
        "--db", &db_path, "event", "edit", "1", "--start", "19:00", "--end", "22:00",
    ])
    .assert()
    .failure()
    .stderr(contains("one of --start, --end or --duration"));

    wp().args(["--db", &db_path, "event", "edit", "1", "--duration", "90 mins"])
        .assert()
        .success()
        .stdout(contains("19:30").and(contains("1h 30m")));

    wp().args(["--db", &db_path, "event", "edit", "1", "--duration", "25h"])
        .assert()
        .failure()
        .stderr(contains("Failed to update event"));
}

#[test]
fn test_event_without_project_fails() {
    let db_path = setup_test_db("cli_event_no_project");
    init_db(&db_path);

    wp().args(["--db", &db_path, "event", "list"])
        .assert()
        .failure()
        .stderr(contains("No project found"));
}

#[test]
fn test_global_project_flag_selects_timeline() {
    let db_path = setup_test_db("cli_project_flag");
    init_db(&db_path);

    for name in ["First", "Second"] {
        wp().args(["--db", &db_path, "project", "add", name])
            .assert()
            .success();
    }
    wp().args([
        "--db", &db_path, "--project", "2", "event", "add", "--start", "10:00", "--duration",
        "30", "--title", "Vows",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(contains("First").and(contains("Vows").not()));

    wp().args(["--db", &db_path, "--project", "2", "event", "list"])
        .assert()
        .success()
        .stdout(contains("Vows"));
}

#[test]
fn test_guest_validation() {
    let db_path = setup_test_db("cli_guest_validation");
    init_db(&db_path);

    wp().args(["--db", &db_path, "guest", "add", "  ", "--category", "Family"])
        .assert()
        .failure()
        .stderr(contains("Failed to add guest: Guest name cannot be empty"));

    wp().args(["--db", &db_path, "guest", "add", "Anna", "--category", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Failed to add guest"));
}

#[test]
fn test_assign_missing_guest_fails_without_changes() {
    let db_path = setup_test_db("cli_assign_missing_guest");
    init_db_with_guests(&db_path);

    wp().args(["--db", &db_path, "table", "assign", "99", "1"])
        .assert()
        .failure()
        .stderr(contains("Failed to assign guest to table"));

    wp().args(["--db", &db_path, "guest", "list", "--unassigned"])
        .assert()
        .success()
        .stdout(contains("Sara"))
        .stdout(contains("Anna").not());
}

#[test]
fn test_delete_table_unassigns_guests() {
    let db_path = setup_test_db("cli_delete_table");
    init_db_with_guests(&db_path);

    wp().args(["--db", &db_path, "table", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Table deleted successfully"))
        .stdout(contains("2 guest(s)"));

    wp().args(["--db", &db_path, "table", "list"])
        .assert()
        .success()
        .stdout(contains("Table 1").not())
        .stdout(contains("Unassigned guests"))
        .stdout(contains("Anna"))
        .stdout(contains("Marco"));
}

#[test]
fn test_overview_shows_couple_and_sections() {
    let db_path = setup_test_db("cli_overview");
    init_db(&db_path);

    wp().args(["--db", &db_path, "project", "add", "Big day", "--date", "2026-06-14"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "overview"])
        .assert()
        .success()
        .stdout(contains("Wedding Planning Of"))
        .stdout(contains("Bride & Groom"))
        .stdout(contains("June 14, 2026"));

    wp().args(["--db", &db_path, "profile", "--bride", "Anna", "--groom", "Marco"])
        .assert()
        .success()
        .stdout(contains("Profile updated successfully"));

    wp().args(["--db", &db_path, "overview"])
        .assert()
        .success()
        .stdout(contains("Anna & Marco"))
        .stdout(contains("/guests"))
        .stdout(contains("/sitting-plan"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log_info");
    init_db_with_guests(&db_path);

    wp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("assign"));

    wp().args(["--db", &db_path, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Guests"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("No dangling guest, table or event references"))
        .stdout(contains("Vacuum completed"));

    wp().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("no migration pending"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db(&db_path);

    let dest = temp_out("cli_backup", "sqlite");
    let zip = dest.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    wp().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success();

    assert!(fs::metadata(&zip).is_ok());
    assert!(fs::metadata(&dest).is_err());
    assert_eq!(archive_entries(&zip), vec!["cli_backup_out.sqlite".to_string()]);
}

/// Names of the entries of a zip archive; panics if it is not one.
fn archive_entries(path: &str) -> Vec<String> {
    let file = fs::File::open(path).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip archive");
    (0..archive.len())
        .map(|i| {
            let entry = archive.by_index(i).expect("archive entry");
            assert!(entry.size() > 0, "empty entry {}", entry.name());
            entry.name().to_string()
        })
        .collect()
}

#[test]
fn test_backup_compressed_to_zip_path_keeps_the_archive() {
    let db_path = setup_test_db("cli_backup_zip_dest");
    init_db_with_guests(&db_path);

    let zip = temp_out("cli_backup_zip_dest", "zip");

    wp().args(["--db", &db_path, "backup", "--file", &zip, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&zip).map(|m| m.len() > 0).unwrap_or(false));
    assert_eq!(
        archive_entries(&zip),
        vec!["cli_backup_zip_dest_wedplanner.sqlite".to_string()]
    );
}

#[test]
fn test_backup_asks_before_overwriting_existing_archive() {
    let db_path = setup_test_db("cli_backup_existing_zip");
    init_db(&db_path);

    let dest = temp_out("cli_backup_existing_zip", "sqlite");
    let zip = dest.replace(".sqlite", ".zip");
    fs::write(&zip, "previous backup").unwrap();

    // no answer on stdin means "no"
    wp().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Backup cancelled"));
    assert_eq!(fs::read_to_string(&zip).unwrap(), "previous backup");

    wp().args(["--db", &db_path, "backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success();
    assert_eq!(archive_entries(&zip), vec!["cli_backup_existing_zip_out.sqlite".to_string()]);
    assert!(fs::metadata(&dest).is_err());
}
