use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppResult};
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open_initialized(&cfg.database)?;
        ExportLogic::export(
            &pool,
            &cfg.owner,
            *format,
            file,
            &cfg.unassigned_placeholder,
            *force,
        )
        .failed_to("export sitting plan")?;
    }

    Ok(())
}
