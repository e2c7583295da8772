use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::guests::GuestLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the default guest categories of the owner
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing wedplanner…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::open_initialized(&cfg.database)?;

    let seeded = GuestLogic::seed_default_categories(&mut pool, &cfg.owner)?;
    if seeded > 0 {
        success(format!("Added {seeded} default guest categories."));
    }

    if let Err(e) = audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 wedplanner initialization completed!");
    Ok(())
}
