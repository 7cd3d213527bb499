use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::window::TimeWindow;

/// Handle the `export` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        world,
        from,
        to,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let window = TimeWindow::new(*from, *to);

        ExportLogic::export(&mut pool, format.clone(), file, world, window, *force)?;
    }
    Ok(())
}
