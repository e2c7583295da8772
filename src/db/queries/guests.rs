use crate::errors::AppResult;
use crate::models::Guest;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_GUESTS: &str = "
    SELECT g.id, g.name, g.category_id, c.name AS category, g.table_id, g.owner, g.created_at
    FROM guests g
    LEFT JOIN guest_categories c ON c.id = g.category_id";

pub fn map_row(row: &Row) -> Result<Guest> {
    Ok(Guest {
        id: row.get("id")?,
        name: row.get("name")?,
        category_id: row.get("category_id")?,
        category: row.get("category")?,
        table_id: row.get("table_id")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_guest(conn: &Connection, g: &Guest) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO guests (name, category_id, table_id, owner, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![g.name, g.category_id, g.table_id, g.owner, g.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_guest(conn: &Connection, id: i64, name: &str, category_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE guests SET name = ?1, category_id = ?2 WHERE id = ?3",
        params![name, category_id, id],
    )?;
    Ok(n)
}

/// Set (or clear, with `None`) the table of a guest.
pub fn set_guest_table(conn: &Connection, guest_id: i64, table_id: Option<i64>) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE guests SET table_id = ?1 WHERE id = ?2",
        params![table_id, guest_id],
    )?;
    Ok(n)
}

pub fn delete_guest(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM guests WHERE id = ?1", [id])?)
}

pub fn get_guest(conn: &Connection, id: i64, owner: &str) -> AppResult<Option<Guest>> {
    let sql = format!("{SELECT_GUESTS} WHERE g.id = ?1 AND g.owner = ?2");
    let g = conn
        .query_row(&sql, params![id, owner], map_row)
        .optional()?;
    Ok(g)
}

pub fn list_guests(conn: &Connection, owner: &str) -> AppResult<Vec<Guest>> {
    let sql = format!("{SELECT_GUESTS} WHERE g.owner = ?1 ORDER BY g.name COLLATE NOCASE, g.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn list_guests_by_table(conn: &Connection, table_id: i64) -> AppResult<Vec<Guest>> {
    let sql = format!("{SELECT_GUESTS} WHERE g.table_id = ?1 ORDER BY g.name COLLATE NOCASE, g.id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([table_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
