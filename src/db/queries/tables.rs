use crate::errors::AppResult;
use crate::models::SeatingTable;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_row(row: &Row) -> Result<SeatingTable> {
    Ok(SeatingTable {
        id: row.get("id")?,
        name: row.get("name")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_table(conn: &Connection, t: &SeatingTable) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tables (name, owner, created_at) VALUES (?1, ?2, ?3)",
        params![t.name, t.owner, t.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn rename_table(conn: &Connection, id: i64, name: &str) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE tables SET name = ?1 WHERE id = ?2",
        params![name, id],
    )?;
    Ok(n)
}

pub fn delete_table(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM tables WHERE id = ?1", [id])?)
}

pub fn get_table(conn: &Connection, id: i64, owner: &str) -> AppResult<Option<SeatingTable>> {
    let t = conn
        .query_row(
            "SELECT * FROM tables WHERE id = ?1 AND owner = ?2",
            params![id, owner],
            map_row,
        )
        .optional()?;
    Ok(t)
}

pub fn list_tables(conn: &Connection, owner: &str) -> AppResult<Vec<SeatingTable>> {
    let mut stmt = conn.prepare("SELECT * FROM tables WHERE owner = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
