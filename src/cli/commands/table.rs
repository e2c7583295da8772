use crate::cli::parser::{Commands, TableAction};
use crate::config::Config;
use crate::core::seating::SeatingLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::confirm;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::{bold, italic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Table { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let owner = cfg.owner.as_str();

        match action {
            TableAction::Add { name } => {
                let t = SeatingLogic::add_table(&mut pool, owner, name).failed_to("add table")?;
                success(format!("Table #{} '{}' added successfully", t.id, t.name));
            }

            TableAction::Rename { id, name } => {
                let t = SeatingLogic::rename_table(&mut pool, owner, *id, name)
                    .failed_to("update table")?;
                success(format!("Table #{} renamed to '{}'", t.id, t.name));
            }

            TableAction::Del { id, yes } => {
                if !*yes && !confirm(&format!("Delete table #{id}? Its guests will be unassigned.")) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                let (t, unseated) = SeatingLogic::delete_table(&mut pool, owner, *id)
                    .failed_to("delete table")?;
                success("Table deleted successfully");
                if !unseated.is_empty() {
                    info(format!(
                        "{} guest(s) from '{}' are now unassigned",
                        unseated.len(),
                        t.name
                    ));
                }
            }

            TableAction::Assign { guest_id, table_id } => {
                let (g, t) = SeatingLogic::assign_guest(&mut pool, owner, *guest_id, *table_id)
                    .failed_to("assign guest to table")?;
                success("Guest assigned to table successfully");
                info(format!("{} → {}", g.name, t.name));
            }

            TableAction::Remove { guest_id } => {
                let g = SeatingLogic::remove_guest(&mut pool, owner, *guest_id)
                    .failed_to("remove guest from table")?;
                success(format!("{} removed from table successfully", g.name));
            }

            TableAction::List => {
                let (plan, unassigned) = SeatingLogic::plan(&pool, owner)?;
                header("Sitting Plan");

                if plan.is_empty() {
                    info("No tables yet: add one with `wedplanner table add <NAME>`.");
                }

                for entry in &plan {
                    println!(
                        "{} {}#{}{} ({} guests)",
                        bold(&entry.table.name),
                        GREY,
                        entry.table.id,
                        RESET,
                        entry.guests.len()
                    );
                    if entry.guests.is_empty() {
                        println!("   {}", italic("No guests assigned"));
                    }
                    for g in &entry.guests {
                        println!("   • {} {}#{}{}", g.name, GREY, g.id, RESET);
                    }
                    println!();
                }

                if !unassigned.is_empty() {
                    println!("{}Unassigned guests{} ({})", CYAN, RESET, unassigned.len());
                    for g in &unassigned {
                        println!("   • {} {}#{}{}", g.name, GREY, g.id, RESET);
                    }
                }
            }
        }
    }

    Ok(())
}
