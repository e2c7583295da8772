use super::conversion_error;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Project> {
    let date_raw: Option<String> = row.get("wedding_date")?;
    let wedding_date = match date_raw {
        Some(s) if !s.is_empty() => Some(
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| conversion_error(2, AppError::InvalidDate(s.clone())))?,
        ),
        _ => None,
    };

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        wedding_date,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
        events: Vec::new(),
    })
}

pub fn insert_project(conn: &Connection, p: &Project) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO projects (name, wedding_date, owner, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![p.name, p.wedding_date_str(), p.owner, p.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_project(conn: &Connection, p: &Project) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE projects SET name = ?1, wedding_date = ?2 WHERE id = ?3",
        params![p.name, p.wedding_date_str(), p.id],
    )?;
    Ok(n)
}

pub fn delete_project(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM projects WHERE id = ?1", [id])?)
}

pub fn get_project(conn: &Connection, id: i64, owner: &str) -> AppResult<Option<Project>> {
    let p = conn
        .query_row(
            "SELECT * FROM projects WHERE id = ?1 AND owner = ?2",
            params![id, owner],
            map_row,
        )
        .optional()?;
    Ok(p)
}

/// Projects of `owner`, oldest first (the first one is the default).
pub fn list_projects(conn: &Connection, owner: &str) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM projects WHERE owner = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
