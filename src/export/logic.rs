use crate::core::codec;
use crate::db::pool::DbPool;
use crate::db::queries::{get_world_by_name, list_worlds};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::calendar::CalendarConfig;
use crate::models::window::TimeWindow;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use rusqlite::params_from_iter;
use std::collections::HashMap;
use std::io;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export events, optionally restricted to one world and/or a window of
    /// world-seconds.
    ///
    /// - `file`: absolute output path
    /// - `world`: `None` exports every world
    /// - `window`: bounds in world-seconds, `None` side = unbounded
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        world: &Option<String>,
        window: TimeWindow,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let world_id = match world {
            Some(name) => Some(get_world_by_name(pool, name)?.id),
            None => None,
        };

        let events_vec = load_events(pool, world_id, window)?;

        if events_vec.is_empty() {
            warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&events_vec, path)?,
            ExportFormat::Json => export_json(&events_vec, path)?,
            ExportFormat::Xlsx => export_xlsx(&events_vec, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(world, window);
                export_pdf(&events_vec, path, &title)?
            }
        }

        Ok(())
    }
}

/// Build the PDF title from the selected world and window.
fn build_pdf_title(world: &Option<String>, window: TimeWindow) -> String {
    let scope = match world {
        Some(name) => format!("Timeline events for world '{}'", name),
        None => "Timeline events".to_string(),
    };

    match (window.start, window.end) {
        (None, None) => scope,
        (Some(s), None) => format!("{} from {}", scope, s),
        (None, Some(e)) => format!("{} up to {}", scope, e),
        (Some(s), Some(e)) => format!("{} from {} to {}", scope, s, e),
    }
}

/// Load events with their owning world's name, formatting the world date
/// under that world's calendar (identity rendering when it has none).
fn load_events(
    pool: &mut DbPool,
    world_id: Option<i64>,
    window: TimeWindow,
) -> AppResult<Vec<EventExport>> {
    // Per-world calendar lookup; an invalid calendar fails the export rather
    // than being silently replaced.
    let mut calendars: HashMap<i64, Option<CalendarConfig>> = HashMap::new();
    for w in list_worlds(pool)? {
        calendars.insert(w.id, w.calendar()?);
    }

    let mut sql = String::from(
        "SELECT e.id, w.name, e.title, e.seconds, e.source, e.created_at, e.world_id
         FROM events e JOIN worlds w ON w.id = e.world_id",
    );

    let mut conds: Vec<&str> = Vec::new();
    let mut binds: Vec<i64> = Vec::new();

    if let Some(wid) = world_id {
        conds.push("e.world_id = ?");
        binds.push(wid);
    }
    if let Some(s) = window.start {
        conds.push("e.seconds >= ?");
        binds.push(s);
    }
    if let Some(e) = window.end {
        conds.push("e.seconds <= ?");
        binds.push(e);
    }

    if !conds.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conds.join(" AND "));
    }
    sql.push_str(" ORDER BY e.seconds ASC, e.id ASC");

    let conn = &mut pool.conn;
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(params_from_iter(binds.iter()), |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, i64>(6)?,
        ))
    })?;

    let mut events = Vec::new();
    for r in rows {
        let (id, world, title, seconds, source, created_at, wid) = r?;

        let world_date = match calendars.get(&wid) {
            Some(Some(cal)) => codec::format_instant(seconds, cal),
            _ => codec::format_raw_instant(seconds),
        };

        events.push(EventExport {
            id,
            world,
            title,
            seconds,
            world_date,
            source,
            created_at,
        });
    }

    Ok(events)
}
