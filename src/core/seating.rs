//! Sitting plan: seating tables and guest assignment.
//!
//! Assignment lives on the guest row (`guests.table_id`). Deleting a table
//! unassigns its guests first and removes the table afterwards; the two
//! steps are not wrapped in a transaction, so a failure between them leaves
//! the guests already unassigned.

use crate::db::changes::{Change, ChangeKind};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::guests::{get_guest, list_guests, list_guests_by_table, set_guest_table};
use crate::db::queries::tables::{delete_table, get_table, insert_table, list_tables, rename_table};
use crate::errors::{AppError, AppResult};
use crate::models::{Guest, SeatingTable};
use chrono::Local;

/// A table together with the guests seated at it.
#[derive(Debug, Clone)]
pub struct TableWithGuests {
    pub table: SeatingTable,
    pub guests: Vec<Guest>,
}

fn required_name(name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation("Table name is required".into()));
    }
    Ok(n.to_string())
}

pub struct SeatingLogic;

impl SeatingLogic {
    pub fn add_table(pool: &mut DbPool, owner: &str, name: &str) -> AppResult<SeatingTable> {
        let mut table = SeatingTable {
            id: 0,
            name: required_name(name)?,
            owner: owner.to_string(),
            created_at: Local::now().to_rfc3339(),
        };

        table.id = insert_table(&pool.conn, &table)?;

        audit(&pool.conn, "add", &format!("table #{}", table.id), &table.name)?;
        pool.notify(Change::new("tables", table.id, ChangeKind::Insert));

        Ok(table)
    }

    pub fn rename_table(
        pool: &mut DbPool,
        owner: &str,
        id: i64,
        name: &str,
    ) -> AppResult<SeatingTable> {
        let mut table =
            get_table(&pool.conn, id, owner)?.ok_or_else(|| AppError::not_found("Table", id))?;
        let new_name = required_name(name)?;

        rename_table(&pool.conn, id, &new_name)?;

        audit(
            &pool.conn,
            "edit",
            &format!("table #{id}"),
            &format!("{} → {}", table.name, new_name),
        )?;
        pool.notify(Change::new("tables", id, ChangeKind::Update));

        table.name = new_name;
        Ok(table)
    }

    /// Unassign every guest of the table, then delete it.
    /// Returns the deleted table and the ids of the guests that were unseated.
    pub fn delete_table(
        pool: &mut DbPool,
        owner: &str,
        id: i64,
    ) -> AppResult<(SeatingTable, Vec<i64>)> {
        let table =
            get_table(&pool.conn, id, owner)?.ok_or_else(|| AppError::not_found("Table", id))?;

        // 1) unassign guests
        let seated = list_guests_by_table(&pool.conn, id)?;
        let mut unseated = Vec::with_capacity(seated.len());
        for g in &seated {
            set_guest_table(&pool.conn, g.id, None)?;
            pool.notify(Change::new("guests", g.id, ChangeKind::Update));
            unseated.push(g.id);
        }

        // 2) delete the table row
        delete_table(&pool.conn, id)?;

        audit(
            &pool.conn,
            "del",
            &format!("table #{id}"),
            &format!("{} ({} guests unassigned)", table.name, unseated.len()),
        )?;
        pool.notify(Change::new("tables", id, ChangeKind::Delete));

        Ok((table, unseated))
    }

    /// Seat a guest at a table. Both must exist, otherwise nothing changes.
    pub fn assign_guest(
        pool: &mut DbPool,
        owner: &str,
        guest_id: i64,
        table_id: i64,
    ) -> AppResult<(Guest, SeatingTable)> {
        let mut guest = get_guest(&pool.conn, guest_id, owner)?
            .ok_or_else(|| AppError::not_found("Guest", guest_id))?;
        let table = get_table(&pool.conn, table_id, owner)?
            .ok_or_else(|| AppError::not_found("Table", table_id))?;

        set_guest_table(&pool.conn, guest_id, Some(table_id))?;

        audit(
            &pool.conn,
            "assign",
            &format!("guest #{guest_id}"),
            &format!("{} → {}", guest.name, table.name),
        )?;
        pool.notify(Change::new("guests", guest_id, ChangeKind::Update));

        guest.table_id = Some(table_id);
        Ok((guest, table))
    }

    /// Remove a guest from whatever table they sit at.
    pub fn remove_guest(pool: &mut DbPool, owner: &str, guest_id: i64) -> AppResult<Guest> {
        let mut guest = get_guest(&pool.conn, guest_id, owner)?
            .ok_or_else(|| AppError::not_found("Guest", guest_id))?;

        set_guest_table(&pool.conn, guest_id, None)?;

        audit(
            &pool.conn,
            "unassign",
            &format!("guest #{guest_id}"),
            &guest.name,
        )?;
        pool.notify(Change::new("guests", guest_id, ChangeKind::Update));

        guest.table_id = None;
        Ok(guest)
    }

    pub fn list_tables(pool: &DbPool, owner: &str) -> AppResult<Vec<SeatingTable>> {
        list_tables(&pool.conn, owner)
    }

    /// Every table with its seated guests, plus the guests with no table.
    pub fn plan(pool: &DbPool, owner: &str) -> AppResult<(Vec<TableWithGuests>, Vec<Guest>)> {
        let tables = list_tables(&pool.conn, owner)?;
        let mut guests = list_guests(&pool.conn, owner)?;

        let plan = tables
            .into_iter()
            .map(|table| {
                let (seated, rest): (Vec<Guest>, Vec<Guest>) = guests
                    .drain(..)
                    .partition(|g| g.table_id == Some(table.id));
                guests = rest;
                TableWithGuests {
                    table,
                    guests: seated,
                }
            })
            .collect();

        Ok((plan, guests))
    }
}
