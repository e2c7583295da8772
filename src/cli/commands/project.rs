use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::projects::ProjectLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::confirm;
use crate::utils::date::{format_long, parse_required_date};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let owner = cfg.owner.as_str();

        match action {
            ProjectAction::Add { name, date } => {
                let wedding_date = date.as_deref().map(parse_required_date).transpose()?;
                let p = ProjectLogic::add(&mut pool, owner, name, wedding_date)
                    .failed_to("create project")?;
                success(format!("Project #{} '{}' created successfully", p.id, p.name));
            }

            ProjectAction::List => {
                let projects = ProjectLogic::list(&pool, owner)?;
                if projects.is_empty() {
                    info("No projects yet: create one with `wedplanner project add <NAME>`.");
                    return Ok(());
                }

                header("Projects");
                let current = cfg.default_project.or(projects.first().map(|p| p.id));
                let mut table =
                    Table::new(vec!["", "ID", "Name", "Wedding date"]).with_separator(&cfg.separator_char);
                for p in &projects {
                    table.add_row(vec![
                        if Some(p.id) == current { "*".into() } else { String::new() },
                        p.id.to_string(),
                        p.name.clone(),
                        p.wedding_date.map(format_long).unwrap_or_else(|| "-".into()),
                    ]);
                }
                print!("{}", table.render());
            }

            ProjectAction::Date { id, date, clear } => {
                let wedding_date = if *clear {
                    None
                } else {
                    date.as_deref().map(parse_required_date).transpose()?
                };
                let p = ProjectLogic::set_date(&mut pool, owner, *id, wedding_date)
                    .failed_to("update wedding date")?;
                match p.wedding_date {
                    Some(d) => success(format!("Wedding date of '{}' set to {}", p.name, format_long(d))),
                    None => success(format!("Wedding date of '{}' cleared", p.name)),
                }
            }

            ProjectAction::Rename { id, name } => {
                let p = ProjectLogic::rename(&mut pool, owner, *id, name)
                    .failed_to("rename project")?;
                success(format!("Project #{} renamed to '{}'", p.id, p.name));
            }

            ProjectAction::Del { id, yes } => {
                if !*yes
                    && !confirm(&format!(
                        "Delete project #{id} and its whole timeline? This action is irreversible."
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }
                let p = ProjectLogic::delete(&mut pool, owner, *id).failed_to("delete project")?;
                success(format!("Project '{}' deleted successfully", p.name));
            }
        }
    }

    Ok(())
}
