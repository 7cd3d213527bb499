use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::WorldEvent;
use crate::models::world::World;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Worlds
// ---------------------------

pub fn map_world_row(row: &Row) -> Result<World> {
    Ok(World {
        id: row.get("id")?,
        name: row.get("name")?,
        epoch: row.get("epoch")?,
        seconds_per_hour: row.get("seconds_per_hour")?,
        hours_per_day: row.get("hours_per_day")?,
        days_per_month: row.get("days_per_month")?,
        months_per_year: row.get("months_per_year")?,
        known_max_seconds: row.get("known_max_seconds")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_world(
    conn: &Connection,
    name: &str,
    epoch: Option<&str>,
    seconds_per_hour: Option<i64>,
    hours_per_day: Option<i64>,
    days_per_month: Option<i64>,
    months_per_year: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO worlds (name, epoch, seconds_per_hour, hours_per_day,
                             days_per_month, months_per_year, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime('now'))",
        params![
            name,
            epoch,
            seconds_per_hour,
            hours_per_day,
            days_per_month,
            months_per_year,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_world_by_name(pool: &mut DbPool, name: &str) -> AppResult<World> {
    let mut stmt = pool.conn.prepare("SELECT * FROM worlds WHERE name = ?1")?;

    stmt.query_row([name], map_world_row)
        .optional()?
        .ok_or_else(|| AppError::NoSuchWorld(name.to_string()))
}

pub fn list_worlds(pool: &mut DbPool) -> AppResult<Vec<World>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM worlds ORDER BY name ASC")?;

    let rows = stmt.query_map([], map_world_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update the calendar columns of a world. Only the supplied fields change;
/// validation of the resulting calendar happens when it is next loaded
/// through `World::calendar()`.
pub fn update_world_calendar(
    conn: &Connection,
    world_id: i64,
    epoch: Option<&str>,
    seconds_per_hour: Option<i64>,
    hours_per_day: Option<i64>,
    days_per_month: Option<i64>,
    months_per_year: Option<i64>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE worlds SET
             epoch            = COALESCE(?2, epoch),
             seconds_per_hour = COALESCE(?3, seconds_per_hour),
             hours_per_day    = COALESCE(?4, hours_per_day),
             days_per_month   = COALESCE(?5, days_per_month),
             months_per_year  = COALESCE(?6, months_per_year)
         WHERE id = ?1",
        params![
            world_id,
            epoch,
            seconds_per_hour,
            hours_per_day,
            days_per_month,
            months_per_year,
        ],
    )?;
    Ok(())
}

/// Refresh the world's recorded maximum event time from its events.
/// Called after every event insert/delete so relative windows stay anchored.
pub fn refresh_known_max(conn: &Connection, world_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE worlds
            SET known_max_seconds = (SELECT MAX(seconds) FROM events WHERE world_id = ?1)
          WHERE id = ?1",
        params![world_id],
    )?;
    Ok(())
}

// ---------------------------
// Events
// ---------------------------

pub fn map_event_row(row: &Row) -> Result<WorldEvent> {
    Ok(WorldEvent {
        id: row.get("id")?,
        world_id: row.get("world_id")?,
        title: row.get("title")?,
        seconds: row.get("seconds")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &WorldEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (world_id, title, seconds, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![ev.world_id, ev.title, ev.seconds, ev.source, ev.created_at],
    )?;

    let id = conn.last_insert_rowid();
    refresh_known_max(conn, ev.world_id)?;
    Ok(id)
}

pub fn load_events_by_world(pool: &mut DbPool, world_id: i64) -> AppResult<Vec<WorldEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE world_id = ?1
         ORDER BY seconds ASC, id ASC",
    )?;

    let rows = stmt.query_map([world_id], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_event(conn: &Connection, world_id: i64, event_id: i64) -> AppResult<()> {
    let affected = conn.execute(
        "DELETE FROM events WHERE world_id = ?1 AND id = ?2",
        params![world_id, event_id],
    )?;

    if affected == 0 {
        return Err(AppError::NoSuchEvent(event_id));
    }

    refresh_known_max(conn, world_id)?;
    Ok(())
}

/// (min, max) seconds over a world's events, if it has any.
/// Used to clamp user-requested windows against the current selection.
pub fn selection_bounds(pool: &mut DbPool, world_id: i64) -> AppResult<Option<(i64, i64)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT MIN(seconds), MAX(seconds) FROM events WHERE world_id = ?1",
    )?;

    let bounds: (Option<i64>, Option<i64>) =
        stmt.query_row([world_id], |row| Ok((row.get(0)?, row.get(1)?)))?;

    match bounds {
        (Some(min), Some(max)) => Ok(Some((min, max))),
        _ => Ok(None),
    }
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
