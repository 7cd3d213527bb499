use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarConfig;
use crate::models::world::World;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::World {
        add,
        list,
        set,
        epoch,
        seconds_per_hour,
        hours_per_day,
        days_per_month,
        months_per_year,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let radixes = (
            *seconds_per_hour,
            *hours_per_day,
            *days_per_month,
            *months_per_year,
        );

        if let Some(name) = add {
            add_world(&mut pool, name, epoch.as_deref(), radixes)?;
        } else if let Some(name) = set {
            set_calendar(&mut pool, name, epoch.as_deref(), radixes)?;
        } else if *list {
            list_worlds(&mut pool)?;
        } else {
            println!("Nothing to do: use --add, --set or --list.");
        }
    }
    Ok(())
}

type Radixes = (Option<i64>, Option<i64>, Option<i64>, Option<i64>);

fn add_world(
    pool: &mut DbPool,
    name: &str,
    epoch: Option<&str>,
    radixes: Radixes,
) -> AppResult<()> {
    let (sph, hpd, dpm, mpy) = radixes;

    // Calendar flags are all-or-nothing: a partial calendar would make every
    // later conversion undefined.
    match (sph, hpd, dpm, mpy) {
        (None, None, None, None) => {}
        (Some(sph), Some(hpd), Some(dpm), Some(mpy)) => {
            CalendarConfig::new(sph, hpd, dpm, mpy, None)?;
        }
        _ => return Err(AppError::IncompleteCalendar(name.to_string())),
    }

    queries::insert_world(&pool.conn, name, epoch, sph, hpd, dpm, mpy)?;
    log::ttlog(&pool.conn, "world_add", name, "World created")?;

    if sph.is_some() {
        success(format!("World '{}' created with calendar.", name));
    } else {
        success(format!(
            "World '{}' created without calendar (fallback calendar applies to range queries).",
            name
        ));
    }
    Ok(())
}

fn set_calendar(
    pool: &mut DbPool,
    name: &str,
    epoch: Option<&str>,
    radixes: Radixes,
) -> AppResult<()> {
    let world = queries::get_world_by_name(pool, name)?;
    let (sph, hpd, dpm, mpy) = radixes;

    // Validate the effective calendar before touching the row.
    let effective = (
        sph.or(world.seconds_per_hour),
        hpd.or(world.hours_per_day),
        dpm.or(world.days_per_month),
        mpy.or(world.months_per_year),
    );

    match effective {
        (Some(a), Some(b), Some(c), Some(d)) => {
            CalendarConfig::new(a, b, c, d, None)?;
        }
        (None, None, None, None) => {}
        _ => return Err(AppError::IncompleteCalendar(name.to_string())),
    }

    queries::update_world_calendar(&pool.conn, world.id, epoch, sph, hpd, dpm, mpy)?;
    log::ttlog(&pool.conn, "world_set", name, "Calendar updated")?;

    success(format!("Calendar of world '{}' updated.", name));
    Ok(())
}

fn list_worlds(pool: &mut DbPool) -> AppResult<()> {
    let worlds = queries::list_worlds(pool)?;

    if worlds.is_empty() {
        println!("No worlds defined yet. Create one with 'world --add NAME'.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column {
            header: "NAME".into(),
            width: 12,
        },
        Column {
            header: "EPOCH".into(),
            width: 10,
        },
        Column {
            header: "CALENDAR".into(),
            width: 24,
        },
        Column {
            header: "KNOWN MAX".into(),
            width: 12,
        },
    ]);

    for w in &worlds {
        table.add_row(vec![
            w.name.clone(),
            w.epoch.clone().unwrap_or_else(|| "--".into()),
            describe_calendar(w),
            w.known_max_seconds
                .map(|s| s.to_string())
                .unwrap_or_else(|| "--".into()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn describe_calendar(w: &World) -> String {
    match (
        w.seconds_per_hour,
        w.hours_per_day,
        w.days_per_month,
        w.months_per_year,
    ) {
        (Some(sph), Some(hpd), Some(dpm), Some(mpy)) => {
            format!("{}s/h {}h/d {}d/m {}m/y", sph, hpd, dpm, mpy)
        }
        (None, None, None, None) => "-- (fallback)".to_string(),
        _ => "!! incomplete".to_string(),
    }
}
