use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = DbPool::open_initialized(&cfg.database)?;
        BackupLogic::backup(&pool, &cfg.database, file, *compress, *force)
            .failed_to("create backup")?;
    }

    Ok(())
}
