use crate::cli::parser::{Commands, GuestAction};
use crate::config::Config;
use crate::core::guests::{GuestFilter, GuestLogic};
use crate::core::seating::SeatingLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{or_placeholder, truncate};
use crate::utils::table::Table;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Guest { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let owner = cfg.owner.as_str();

        match action {
            GuestAction::Add { name, category } => {
                let g = GuestLogic::add(&mut pool, owner, name, category).failed_to("add guest")?;
                success(format!("Guest #{} '{}' added successfully", g.id, g.name));
            }

            GuestAction::Edit { id, name, category } => {
                let g = GuestLogic::edit(&mut pool, owner, *id, name.as_deref(), category.as_deref())
                    .failed_to("update guest")?;
                success(format!("Guest #{} '{}' updated successfully", g.id, g.name));
            }

            GuestAction::Del { id } => {
                let g = GuestLogic::delete(&mut pool, owner, *id).failed_to("delete guest")?;
                success(format!("Guest '{}' deleted successfully", g.name));
            }

            GuestAction::List {
                category,
                table,
                unassigned,
            } => {
                let category_id = category
                    .as_deref()
                    .map(|c| GuestLogic::resolve_category(&pool, owner, c).map(|c| c.id))
                    .transpose()?;
                let filter = GuestFilter {
                    category_id,
                    table_id: *table,
                    unassigned: *unassigned,
                };

                let guests = GuestLogic::list(&pool, owner, &filter)?;
                if guests.is_empty() {
                    info("No guests found.");
                    return Ok(());
                }

                let table_names: HashMap<i64, String> = SeatingLogic::list_tables(&pool, owner)?
                    .into_iter()
                    .map(|t| (t.id, t.name))
                    .collect();

                header(format!("Guest List ({})", guests.len()));
                let mut out =
                    Table::new(vec!["ID", "Name", "Category", "Table"]).with_separator(&cfg.separator_char);
                for g in &guests {
                    let table_name = g.table_id.and_then(|t| table_names.get(&t)).map(String::as_str);
                    out.add_row(vec![
                        g.id.to_string(),
                        truncate(&g.name, 40),
                        or_placeholder(g.category.as_deref(), &cfg.unassigned_placeholder),
                        colorize_optional(&or_placeholder(table_name, &cfg.unassigned_placeholder)),
                    ]);
                }
                print!("{}", out.render());
            }
        }
    }

    Ok(())
}
