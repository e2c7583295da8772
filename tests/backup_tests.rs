mod common;
use common::{setup_test_db, temp_out};
use std::fs;
use wedplanner::core::backup::BackupLogic;
use wedplanner::db::log::load_log;
use wedplanner::db::pool::DbPool;

#[test]
fn test_compressed_backup_onto_zip_path() {
    let db_path = setup_test_db("backup_zip_path");
    let pool = DbPool::open_initialized(&db_path).unwrap();

    let zip = temp_out("backup_zip_path", "zip");
    fs::write(&zip, "stale").unwrap();

    let written = BackupLogic::backup(&pool, &db_path, &zip, true, true)
        .unwrap()
        .expect("backup written");
    assert_eq!(written.to_string_lossy().to_string(), zip);

    let mut archive = zip::ZipArchive::new(fs::File::open(&zip).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
    let entry = archive.by_index(0).unwrap();
    assert_eq!(entry.name(), "backup_zip_path_wedplanner.sqlite");
    assert!(entry.size() > 0);

    let last = load_log(&pool.conn).unwrap().pop().unwrap();
    assert_eq!(last.operation, "backup");
    assert_eq!(last.target, zip);
}

#[test]
fn test_plain_backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    let pool = DbPool::open_initialized(&db_path).unwrap();

    let dest = temp_out("backup_plain", "sqlite");
    BackupLogic::backup(&pool, &db_path, &dest, false, false).unwrap();

    let bytes = fs::read(&dest).unwrap();
    assert!(bytes.starts_with(b"SQLite format 3\0"));
}
