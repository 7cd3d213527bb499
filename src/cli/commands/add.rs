use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{codec, parse};
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::event::WorldEvent;
use crate::ui::messages::success;

/// Handle the `add` command: record an event on a world's timeline.
/// The time point comes either raw (`--at SECONDS`) or as a date string
/// (`--date 'AD 3-2-5'`), which requires the world to define a calendar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        world,
        title,
        at,
        date,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let w = queries::get_world_by_name(&mut pool, world)?;

        let seconds = match (at, date) {
            (Some(seconds), None) => *seconds,
            (None, Some(date_str)) => {
                let cal = w
                    .calendar()?
                    .ok_or_else(|| AppError::NoCalendar(w.name.clone()))?;
                let parsed = parse::parse_world_date(date_str, &cal)?;
                codec::to_instant(&parsed, &cal)?
            }
            _ => {
                return Err(AppError::Config(
                    "add needs exactly one of --at or --date".to_string(),
                ));
            }
        };

        let ev = WorldEvent::new(w.id, title, seconds);
        let id = queries::insert_event(&pool.conn, &ev)?;

        log::ttlog(
            &pool.conn,
            "add",
            &format!("{}#{}", w.name, id),
            &format!("Event '{}' at {}", title, seconds),
        )?;

        let rendered = match w.calendar()? {
            Some(cal) => codec::format_instant(seconds, &cal),
            None => codec::format_raw_instant(seconds),
        };

        success(format!(
            "Event #{} '{}' added to '{}' at {}.",
            id, title, w.name, rendered
        ));
    }
    Ok(())
}
