use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use std::fs;

/// Handle the `db` subcommand. Flags combine and run in the order
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *show_info) {
            info("Nothing to do: use --migrate, --info, --check or --vacuum.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                info("Schema is up to date, no migration pending.");
            } else {
                info(format!("{} migration(s) pending:", pending.len()));
                for version in &pending {
                    println!("   {GREY}{version}{RESET}");
                }
                run_pending_migrations(&pool.conn)?;
                success("Wedding planner schema migrated.");
            }
        }

        if *show_info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            check_database(&pool)?;
        }

        if *vacuum {
            let before = file_size(&cfg.database);
            pool.conn.execute_batch("VACUUM;")?;
            let after = file_size(&cfg.database);
            success(format!(
                "Vacuum completed: {:.1} KB → {:.1} KB",
                before as f64 / 1024.0,
                after as f64 / 1024.0
            ));
        }
    }

    Ok(())
}

/// SQLite page integrity, then dangling references (a guest seated at a
/// removed table, an event of a removed project).
fn check_database(pool: &DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {integrity}"));
    }

    let mut stmt = pool.conn.prepare("PRAGMA foreign_key_check;")?;
    let dangling = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
    })?;

    let mut found = 0;
    for r in dangling {
        let (table, rowid, parent) = r?;
        warning(format!("{table} row #{rowid} points to a missing {parent} row"));
        found += 1;
    }
    if found == 0 {
        success("No dangling guest, table or event references.");
    }

    Ok(())
}

fn file_size(path: &str) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
