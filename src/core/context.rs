//! Resolution of the "current" wedding project.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::projects::{get_project, list_projects};
use crate::errors::{AppError, AppResult};
use crate::models::Project;

/// Pick the project a command works on: `default_project` from the
/// config (where `--project` is applied), else the first project of the owner.
pub fn current_project(pool: &DbPool, cfg: &Config) -> AppResult<Project> {
    if let Some(id) = cfg.default_project {
        return get_project(&pool.conn, id, &cfg.owner)?
            .ok_or_else(|| AppError::not_found("Project", id));
    }

    list_projects(&pool.conn, &cfg.owner)?
        .into_iter()
        .next()
        .ok_or(AppError::NoProject)
}
