use super::conversion_error;
use crate::errors::{AppError, AppResult};
use crate::models::{EventCategory, TimelineEvent};
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_hhmm(col: usize, s: String) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| conversion_error(col, AppError::InvalidTime(s)))
}

pub fn map_row(row: &Row) -> Result<TimelineEvent> {
    let start_time = parse_hhmm(2, row.get("start_time")?)?;
    let end_time = parse_hhmm(3, row.get("end_time")?)?;

    let cat_str: String = row.get("category")?;
    let category = EventCategory::from_db_str(&cat_str)
        .ok_or_else(|| conversion_error(7, AppError::InvalidCategory(cat_str.clone())))?;

    Ok(TimelineEvent {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        start_time,
        end_time,
        duration_minutes: row.get("duration")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category,
        location: row.get("location")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &TimelineEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (project_id, start_time, end_time, duration, title, description, category, location, owner, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            ev.project_id,
            ev.start_str(),
            ev.end_str(),
            ev.duration_minutes,
            ev.title,
            ev.description,
            ev.category.to_db_str(),
            ev.location,
            ev.owner,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Write every editable field of `ev` in one statement.
pub fn update_event(conn: &Connection, ev: &TimelineEvent) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events
         SET start_time = ?1, end_time = ?2, duration = ?3, title = ?4,
             description = ?5, category = ?6, location = ?7
         WHERE id = ?8",
        params![
            ev.start_str(),
            ev.end_str(),
            ev.duration_minutes,
            ev.title,
            ev.description,
            ev.category.to_db_str(),
            ev.location,
            ev.id,
        ],
    )?;
    Ok(n)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM events WHERE id = ?1", [id])?)
}

pub fn get_event(conn: &Connection, id: i64, owner: &str) -> AppResult<Option<TimelineEvent>> {
    let ev = conn
        .query_row(
            "SELECT * FROM events WHERE id = ?1 AND owner = ?2",
            params![id, owner],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

/// Timeline of a project, ordered by start time.
pub fn load_events_by_project(conn: &Connection, project_id: i64) -> AppResult<Vec<TimelineEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM events
         WHERE project_id = ?1
         ORDER BY start_time ASC, id ASC",
    )?;

    let rows = stmt.query_map([project_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
