use crate::db::changes::{Change, ChangeKind};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::profiles::{get_profile, upsert_profile};
use crate::errors::{AppError, AppResult};
use crate::models::Profile;
use chrono::Local;

pub struct ProfileLogic;

impl ProfileLogic {
    /// The owner's profile, or an empty one if never saved.
    pub fn load(pool: &DbPool, owner: &str) -> AppResult<Profile> {
        Ok(get_profile(&pool.conn, owner)?.unwrap_or_else(|| Profile {
            id: owner.to_string(),
            ..Profile::default()
        }))
    }

    /// Update the couple names. `Some("")` clears a name, `None` keeps it.
    pub fn update(
        pool: &mut DbPool,
        owner: &str,
        bride: Option<&str>,
        groom: Option<&str>,
    ) -> AppResult<Profile> {
        if bride.is_none() && groom.is_none() {
            return Err(AppError::Validation(
                "Nothing to update: use --bride and/or --groom".into(),
            ));
        }

        let mut profile = Self::load(pool, owner)?;
        if let Some(b) = bride {
            profile.bride_name = Some(b.trim().to_string()).filter(|s| !s.is_empty());
        }
        if let Some(g) = groom {
            profile.groom_name = Some(g.trim().to_string()).filter(|s| !s.is_empty());
        }
        profile.updated_at = Some(Local::now().to_rfc3339());

        upsert_profile(&pool.conn, &profile)?;

        audit(&pool.conn, "edit", &format!("profile {owner}"), &profile.couple())?;
        pool.notify(Change::new("profiles", owner, ChangeKind::Update));

        Ok(profile)
    }
}
