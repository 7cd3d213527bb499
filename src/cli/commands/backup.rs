use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `backup` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let dest = expand_tilde(file).to_string_lossy().to_string();
        BackupLogic::backup(&mut pool, cfg, &dest, *compress)?;
    }
    Ok(())
}
