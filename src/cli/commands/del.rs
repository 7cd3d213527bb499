use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `del` command: remove one event by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { world, id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let w = queries::get_world_by_name(&mut pool, world)?;

        queries::delete_event(&pool.conn, w.id, *id)?;

        log::ttlog(
            &pool.conn,
            "del",
            &format!("{}#{}", w.name, id),
            "Event deleted",
        )?;

        success(format!("Event #{} deleted from '{}'.", id, w.name));
    }
    Ok(())
}
