use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{codec, parse};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::colorize_era;

/// Handle the `convert` command: codec in both directions.
///
/// `--seconds` decomposes an instant into the world's calendar date;
/// `--date` recomposes a typed date string into world-seconds. A world
/// without a calendar renders instants as raw timepoints and cannot parse
/// dates at all; the identity fallback never guesses a calendar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        world,
        seconds,
        date,
    } = cmd
    {
        let name = super::resolve_world_arg(world, cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let w = queries::get_world_by_name(&mut pool, &name)?;
        let cal = w.calendar()?;

        match (seconds, date) {
            (Some(s), None) => match &cal {
                Some(c) => {
                    let d = codec::to_world_date(*s, c);
                    let rendered = codec::format_world_date(&d);

                    match &w.epoch {
                        Some(epoch) => println!("{} {}", epoch, rendered),
                        None => println!("{}", rendered),
                    }

                    println!("  era:   {}", colorize_era(d.era_str(), d.is_bc));
                    println!("  year:  {}", d.year);
                    println!("  month: {}", d.month);
                    println!("  day:   {}", d.day);
                    println!("  hour:  {}", d.hour);
                }
                None => println!("{}", codec::format_raw_instant(*s)),
            },
            (None, Some(date_str)) => {
                let c = cal.ok_or_else(|| AppError::NoCalendar(w.name.clone()))?;
                let parsed = parse::parse_world_date(date_str, &c)?;
                let instant = codec::to_instant(&parsed, &c)?;
                println!("{}", instant);
            }
            _ => {
                return Err(AppError::Config(
                    "convert needs exactly one of --seconds or --date".to_string(),
                ));
            }
        }
    }
    Ok(())
}
