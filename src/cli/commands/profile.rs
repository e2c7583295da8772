use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::or_placeholder;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { bride, groom } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let profile = if bride.is_none() && groom.is_none() {
            ProfileLogic::load(&pool, &cfg.owner)?
        } else {
            let p = ProfileLogic::update(&mut pool, &cfg.owner, bride.as_deref(), groom.as_deref())
                .failed_to("update profile")?;
            success("Profile updated successfully");
            p
        };

        header("Profile");
        let placeholder = &cfg.unassigned_placeholder;
        println!(
            "Bride : {}",
            colorize_optional(&or_placeholder(profile.bride_name.as_deref(), placeholder))
        );
        println!(
            "Groom : {}",
            colorize_optional(&or_placeholder(profile.groom_name.as_deref(), placeholder))
        );
    }

    Ok(())
}
