mod common;
use common::{init_db, init_db_with_guests, setup_test_db, temp_out, wp};
use predicates::str::contains;
use std::fs;
use wedplanner::export::build_rows;
use wedplanner::models::{Guest, SeatingTable};

#[test]
fn test_export_csv_one_row_per_guest() {
    let db_path = setup_test_db("export_csv_rows");
    init_db_with_guests(&db_path);

    let out = temp_out("export_csv_rows", "csv");

    wp().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Sitting plan exported as CSV"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "Guest Name,Table Name");
    assert_eq!(lines.len(), 5);
    assert!(lines.contains(&"Anna,Table 1"));
    assert!(lines.contains(&"Marco,Table 1"));
    assert!(lines.contains(&"Luca,Family"));
    assert!(lines.contains(&"Sara,-"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_guests(&db_path);

    let out = temp_out("export_json", "json");

    wp().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().any(|r| r["Guest Name"] == "Sara" && r["Table Name"] == "-"));
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_guests(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    wp().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Sitting plan exported as XLSX"));

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_without_guests_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    wp().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No guests to export"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_guests(&db_path);

    wp().args(["--db", &db_path, "export", "--file", "plan.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_build_rows_placeholder_for_missing_table() {
    let guest = |id: i64, name: &str, table_id: Option<i64>| Guest {
        id,
        name: name.into(),
        category_id: 1,
        category: None,
        table_id,
        owner: "tester".into(),
        created_at: String::new(),
    };
    let tables = vec![SeatingTable {
        id: 1,
        name: "Rose".into(),
        owner: "tester".into(),
        created_at: String::new(),
    }];

    let rows = build_rows(
        &[guest(1, "Anna", Some(1)), guest(2, "Luca", Some(42)), guest(3, "Sara", None)],
        &tables,
        "n/a",
    );

    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.guest.as_str(), r.table.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Anna", "Rose"), ("Luca", "n/a"), ("Sara", "n/a")]);
}
