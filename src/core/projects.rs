use crate::db::changes::{Change, ChangeKind};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::events::load_events_by_project;
use crate::db::queries::projects::{
    delete_project, get_project, insert_project, list_projects, update_project,
};
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use chrono::{Local, NaiveDate};

pub struct ProjectLogic;

impl ProjectLogic {
    pub fn add(
        pool: &mut DbPool,
        owner: &str,
        name: &str,
        wedding_date: Option<NaiveDate>,
    ) -> AppResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Project name is required".into()));
        }

        let mut project = Project {
            id: 0,
            name: name.to_string(),
            wedding_date,
            owner: owner.to_string(),
            created_at: Local::now().to_rfc3339(),
            events: Vec::new(),
        };

        project.id = insert_project(&pool.conn, &project)?;

        audit(
            &pool.conn,
            "add",
            &format!("project #{}", project.id),
            &project.name,
        )?;
        pool.notify(Change::new("projects", project.id, ChangeKind::Insert));

        Ok(project)
    }

    /// Set or clear (with `None`) the wedding date.
    pub fn set_date(
        pool: &mut DbPool,
        owner: &str,
        id: i64,
        wedding_date: Option<NaiveDate>,
    ) -> AppResult<Project> {
        let mut project = get_project(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Project", id))?;

        project.wedding_date = wedding_date;
        update_project(&pool.conn, &project)?;

        audit(
            &pool.conn,
            "edit",
            &format!("project #{id}"),
            &format!(
                "wedding date = {}",
                project.wedding_date_str().unwrap_or_else(|| "none".into())
            ),
        )?;
        pool.notify(Change::new("projects", id, ChangeKind::Update));

        Ok(project)
    }

    pub fn rename(pool: &mut DbPool, owner: &str, id: i64, name: &str) -> AppResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Project name is required".into()));
        }

        let mut project = get_project(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Project", id))?;
        project.name = name.to_string();
        update_project(&pool.conn, &project)?;

        audit(&pool.conn, "edit", &format!("project #{id}"), name)?;
        pool.notify(Change::new("projects", id, ChangeKind::Update));

        Ok(project)
    }

    /// Delete a project; its timeline events go with it.
    pub fn delete(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<Project> {
        let project = get_project(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Project", id))?;

        delete_project(&pool.conn, id)?;

        audit(&pool.conn, "del", &format!("project #{id}"), &project.name)?;
        pool.notify(Change::new("projects", id, ChangeKind::Delete));

        Ok(project)
    }

    pub fn list(pool: &DbPool, owner: &str) -> AppResult<Vec<Project>> {
        list_projects(&pool.conn, owner)
    }

    /// Load a project together with its timeline.
    pub fn with_events(pool: &DbPool, mut project: Project) -> AppResult<Project> {
        project.events = load_events_by_project(&pool.conn, project.id)?;
        Ok(project)
    }
}
