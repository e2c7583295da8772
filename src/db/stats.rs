use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

const COUNTED_TABLES: [(&str, &str); 6] = [
    ("projects", "Projects"),
    ("events", "Timeline events"),
    ("guests", "Guests"),
    ("guest_categories", "Guest categories"),
    ("tables", "Seating tables"),
    ("log", "Log entries"),
];

/// Row count of every store table, in display order.
pub fn table_counts(pool: &DbPool) -> rusqlite::Result<Vec<(&'static str, i64)>> {
    let mut out = Vec::with_capacity(COUNTED_TABLES.len());
    for (table, label) in COUNTED_TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        out.push((label, count));
    }
    Ok(out)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    for (label, count) in table_counts(pool)? {
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    let seated: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM guests WHERE table_id IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Seated guests:{} {}{}{}", CYAN, RESET, GREEN, seated, RESET);

    println!();
    Ok(())
}
