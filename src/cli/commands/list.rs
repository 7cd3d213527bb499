use crate::cli::commands::window::{WindowRequest, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{codec, filter};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::WorldEvent;
use crate::ui::messages::advisory;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

/// Handle the `list` command: resolve a window, filter the world's events
/// through it and print them newest-first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        world,
        last,
        from,
        to,
        unlimited,
        raw,
    } = cmd
    {
        let name = super::resolve_world_arg(world, cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let w = queries::get_world_by_name(&mut pool, &name)?;

        // No range flags at all → whole timeline
        let unlimited = *unlimited || (last.is_none() && from.is_none() && to.is_none());

        let req = WindowRequest {
            last,
            from: *from,
            to: *to,
            unlimited,
            clamp_selection: false,
            min_span: None,
        };

        let (window, advisories) = resolve_window(&mut pool, &w, &req, cfg)?;

        for adv in &advisories {
            advisory(adv);
        }

        let events = queries::load_events_by_world(&mut pool, w.id)?;

        if events.is_empty() {
            println!("No events recorded for '{}'.", w.name);
            return Ok(());
        }

        let records: Vec<(i64, i64)> = events.iter().map(|e| (e.id, e.seconds)).collect();
        let (ids, density) = filter::apply(&window, &records, cfg.density_threshold);

        if let Some(adv) = &density {
            advisory(adv);
        }

        if ids.is_empty() {
            println!("No events inside the window for '{}'.", w.name);
            return Ok(());
        }

        let by_id: HashMap<i64, &WorldEvent> = events.iter().map(|e| (e.id, e)).collect();
        let cal = w.calendar()?;

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                width: 4,
            },
            Column {
                header: "TIMEPOINT".into(),
                width: 12,
            },
            Column {
                header: "DATE".into(),
                width: 14,
            },
            Column {
                header: "TITLE".into(),
                width: 20,
            },
        ]);

        for id in &ids {
            let Some(ev) = by_id.get(id) else { continue };

            let date = match (&cal, *raw) {
                (Some(c), false) => codec::format_instant(ev.seconds, c),
                _ => codec::format_raw_instant(ev.seconds),
            };

            table.add_row(vec![
                ev.id.to_string(),
                ev.seconds.to_string(),
                date,
                ev.title.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("{} event(s).", ids.len());
    }
    Ok(())
}
