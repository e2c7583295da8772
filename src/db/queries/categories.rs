use crate::errors::AppResult;
use crate::models::GuestCategory;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_row(row: &Row) -> Result<GuestCategory> {
    Ok(GuestCategory {
        id: row.get("id")?,
        name: row.get("name")?,
        owner: row.get("owner")?,
    })
}

pub fn insert_category(conn: &Connection, name: &str, owner: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO guest_categories (name, owner) VALUES (?1, ?2)",
        params![name, owner],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert unless a category with the same name already exists; returns true if inserted.
pub fn insert_category_if_missing(conn: &Connection, name: &str, owner: &str) -> AppResult<bool> {
    let n = conn.execute(
        "INSERT OR IGNORE INTO guest_categories (name, owner) VALUES (?1, ?2)",
        params![name, owner],
    )?;
    Ok(n > 0)
}

pub fn delete_category(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM guest_categories WHERE id = ?1", [id])?)
}

pub fn get_category(conn: &Connection, id: i64, owner: &str) -> AppResult<Option<GuestCategory>> {
    let c = conn
        .query_row(
            "SELECT * FROM guest_categories WHERE id = ?1 AND owner = ?2",
            params![id, owner],
            map_row,
        )
        .optional()?;
    Ok(c)
}

pub fn find_category_by_name(
    conn: &Connection,
    name: &str,
    owner: &str,
) -> AppResult<Option<GuestCategory>> {
    let c = conn
        .query_row(
            "SELECT * FROM guest_categories WHERE owner = ?1 AND name = ?2 COLLATE NOCASE",
            params![owner, name],
            map_row,
        )
        .optional()?;
    Ok(c)
}

pub fn list_categories(conn: &Connection, owner: &str) -> AppResult<Vec<GuestCategory>> {
    let mut stmt =
        conn.prepare("SELECT * FROM guest_categories WHERE owner = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_guests_in_category(conn: &Connection, id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM guests WHERE category_id = ?1",
        [id],
        |row| row.get(0),
    )?;
    Ok(n)
}
