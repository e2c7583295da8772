use crate::errors::AppResult;
use crate::models::Profile;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_profile(conn: &Connection, id: &str) -> AppResult<Option<Profile>> {
    let p = conn
        .query_row(
            "SELECT id, bride_name, groom_name, updated_at FROM profiles WHERE id = ?1",
            [id],
            |row| {
                Ok(Profile {
                    id: row.get(0)?,
                    bride_name: row.get(1)?,
                    groom_name: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(p)
}

pub fn upsert_profile(conn: &Connection, p: &Profile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profiles (id, bride_name, groom_name, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            bride_name = excluded.bride_name,
            groom_name = excluded.groom_name,
            updated_at = excluded.updated_at",
        params![p.id, p.bride_name, p.groom_name, p.updated_at],
    )?;
    Ok(())
}
