use crate::cli::parser::{CategoryAction, Commands};
use crate::config::Config;
use crate::core::guests::GuestLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Category { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let owner = cfg.owner.as_str();

        match action {
            CategoryAction::Add { name } => {
                let c = GuestLogic::add_category(&mut pool, owner, name)
                    .failed_to("add category")?;
                success(format!("Category #{} '{}' added successfully", c.id, c.name));
            }

            CategoryAction::Del { id } => {
                let c = GuestLogic::delete_category(&mut pool, owner, *id)
                    .failed_to("delete category")?;
                success(format!("Category '{}' deleted successfully", c.name));
            }

            CategoryAction::List => {
                let cats = GuestLogic::list_categories(&pool, owner)?;
                if cats.is_empty() {
                    info("No guest categories: run `wedplanner init` to seed the defaults.");
                    return Ok(());
                }
                header("Guest categories");
                let mut t = Table::new(vec!["ID", "Name"]).with_separator(&cfg.separator_char);
                for c in cats {
                    t.add_row(vec![c.id.to_string(), c.name]);
                }
                print!("{}", t.render());
            }
        }
    }

    Ok(())
}
