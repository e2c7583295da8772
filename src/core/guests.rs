use crate::db::changes::{Change, ChangeKind};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::categories::{
    count_guests_in_category, delete_category, find_category_by_name, get_category,
    insert_category, insert_category_if_missing, list_categories,
};
use crate::db::queries::guests::{delete_guest, get_guest, insert_guest, list_guests, update_guest};
use crate::errors::{AppError, AppResult};
use crate::models::guest_category::DEFAULT_CATEGORIES;
use crate::models::{Guest, GuestCategory};
use chrono::Local;

/// Filter for guest listings.
#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    pub category_id: Option<i64>,
    pub table_id: Option<i64>,
    pub unassigned: bool,
}

impl GuestFilter {
    fn keeps(&self, g: &Guest) -> bool {
        self.category_id.is_none_or(|c| g.category_id == c)
            && self.table_id.is_none_or(|t| g.table_id == Some(t))
            && (!self.unassigned || !g.is_seated())
    }
}

fn required_guest_name(name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation("Guest name cannot be empty".into()));
    }
    Ok(n.to_string())
}

pub struct GuestLogic;

impl GuestLogic {
    /// Resolve a category given by id or by (case-insensitive) name.
    pub fn resolve_category(pool: &DbPool, owner: &str, input: &str) -> AppResult<GuestCategory> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::Validation("Please select a category".into()));
        }

        if let Ok(id) = input.parse::<i64>() {
            return get_category(&pool.conn, id, owner)?
                .ok_or_else(|| AppError::not_found("Category", id));
        }

        find_category_by_name(&pool.conn, input, owner)?
            .ok_or_else(|| AppError::Validation(format!("Unknown guest category '{input}'")))
    }

    pub fn add(pool: &mut DbPool, owner: &str, name: &str, category: &str) -> AppResult<Guest> {
        let name = required_guest_name(name)?;
        let cat = Self::resolve_category(pool, owner, category)?;

        let mut guest = Guest {
            id: 0,
            name,
            category_id: cat.id,
            category: Some(cat.name),
            table_id: None,
            owner: owner.to_string(),
            created_at: Local::now().to_rfc3339(),
        };

        guest.id = insert_guest(&pool.conn, &guest)?;

        audit(&pool.conn, "add", &format!("guest #{}", guest.id), &guest.name)?;
        pool.notify(Change::new("guests", guest.id, ChangeKind::Insert));

        Ok(guest)
    }

    /// Update name and/or category; the fields left `None` are kept.
    pub fn edit(
        pool: &mut DbPool,
        owner: &str,
        id: i64,
        name: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Guest> {
        if name.is_none() && category.is_none() {
            return Err(AppError::Validation("Nothing to edit".into()));
        }

        let mut guest =
            get_guest(&pool.conn, id, owner)?.ok_or_else(|| AppError::not_found("Guest", id))?;

        if let Some(n) = name {
            guest.name = required_guest_name(n)?;
        }
        if let Some(c) = category {
            let cat = Self::resolve_category(pool, owner, c)?;
            guest.category_id = cat.id;
            guest.category = Some(cat.name);
        }

        update_guest(&pool.conn, id, &guest.name, guest.category_id)?;

        audit(&pool.conn, "edit", &format!("guest #{id}"), &guest.name)?;
        pool.notify(Change::new("guests", id, ChangeKind::Update));

        Ok(guest)
    }

    pub fn delete(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<Guest> {
        let guest =
            get_guest(&pool.conn, id, owner)?.ok_or_else(|| AppError::not_found("Guest", id))?;

        delete_guest(&pool.conn, id)?;

        audit(&pool.conn, "del", &format!("guest #{id}"), &guest.name)?;
        pool.notify(Change::new("guests", id, ChangeKind::Delete));

        Ok(guest)
    }

    pub fn list(pool: &DbPool, owner: &str, filter: &GuestFilter) -> AppResult<Vec<Guest>> {
        Ok(list_guests(&pool.conn, owner)?
            .into_iter()
            .filter(|g| filter.keeps(g))
            .collect())
    }

    // ------------------------------------------------
    // Categories
    // ------------------------------------------------

    /// Seed the default categories for `owner`; returns how many were created.
    pub fn seed_default_categories(pool: &mut DbPool, owner: &str) -> AppResult<usize> {
        let mut created = 0;
        for name in DEFAULT_CATEGORIES {
            if insert_category_if_missing(&pool.conn, name, owner)? {
                created += 1;
            }
        }
        if created > 0 {
            audit(
                &pool.conn,
                "add",
                "guest_categories",
                &format!("Seeded {created} default categories"),
            )?;
            pool.notify(Change::new("guest_categories", owner, ChangeKind::Insert));
        }
        Ok(created)
    }

    pub fn add_category(pool: &mut DbPool, owner: &str, name: &str) -> AppResult<GuestCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Category name cannot be empty".into()));
        }
        if find_category_by_name(&pool.conn, name, owner)?.is_some() {
            return Err(AppError::Validation(format!(
                "Category '{name}' already exists"
            )));
        }

        let id = insert_category(&pool.conn, name, owner)?;

        audit(&pool.conn, "add", &format!("category #{id}"), name)?;
        pool.notify(Change::new("guest_categories", id, ChangeKind::Insert));

        Ok(GuestCategory {
            id,
            name: name.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Refused while guests still belong to the category.
    pub fn delete_category(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<GuestCategory> {
        let cat = get_category(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Category", id))?;

        let in_use = count_guests_in_category(&pool.conn, id)?;
        if in_use > 0 {
            return Err(AppError::Validation(format!(
                "Category '{}' is used by {} guest(s)",
                cat.name, in_use
            )));
        }

        delete_category(&pool.conn, id)?;

        audit(&pool.conn, "del", &format!("category #{id}"), &cat.name)?;
        pool.notify(Change::new("guest_categories", id, ChangeKind::Delete));

        Ok(cat)
    }

    pub fn list_categories(pool: &DbPool, owner: &str) -> AppResult<Vec<GuestCategory>> {
        list_categories(&pool.conn, owner)
    }
}
