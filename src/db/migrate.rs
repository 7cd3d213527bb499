use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `worlds` table has a `known_max_seconds` column.
fn worlds_has_known_max_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('worlds')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "known_max_seconds" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `worlds` table with the modern schema.
///
/// The four calendar radix columns are nullable as a group: a world created
/// without calendar settings keeps all of them NULL.
fn create_worlds_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS worlds (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            name              TEXT NOT NULL UNIQUE,
            epoch             TEXT,
            seconds_per_hour  INTEGER,
            hours_per_day     INTEGER,
            days_per_month    INTEGER,
            months_per_year   INTEGER,
            known_max_seconds INTEGER,
            created_at        TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            world_id   INTEGER NOT NULL REFERENCES worlds(id),
            title      TEXT NOT NULL,
            seconds    INTEGER NOT NULL,
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_world_seconds ON events(world_id, seconds);
        "#,
    )?;
    Ok(())
}

fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_known_max.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| backup_name.into());

    let file = File::create(&backup_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            e.kind(),
            format!("Backup failed (create): {}", e),
        )))
    })?;

    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (start_file): {}",
            e
        ))))
    })?;

    let db_content = fs::read(db_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (read): {}",
            e
        ))))
    })?;

    zip.write_all(&db_content).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (write_all): {}",
            e
        ))))
    })?;

    zip.finish().map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (finish): {}",
            e
        ))))
    })?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Migrate an old `worlds` table to include the `known_max_seconds` column
/// and backfill it from the recorded events.
fn migrate_add_known_max_seconds(conn: &Connection) -> Result<()> {
    let version = "20250601_0001_add_known_max_seconds";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    warning("Adding 'known_max_seconds' column to worlds table...");

    conn.execute_batch(
        r#"
        ALTER TABLE worlds ADD COLUMN known_max_seconds INTEGER;

        UPDATE worlds
           SET known_max_seconds = (SELECT MAX(seconds) FROM events
                                     WHERE events.world_id = worlds.id);
        "#,
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added known_max_seconds to worlds')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'known_max_seconds' to worlds table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure base tables exist
    let worlds_exists = table_exists(conn, "worlds")?;

    if !worlds_exists {
        create_worlds_table(conn)?;
        create_events_table(conn)?;
        success("Created worlds and events tables (modern schema).");
        return Ok(());
    }

    create_events_table(conn)?;

    // 3) Upgrade a legacy worlds table (pre known_max_seconds),
    //    with a safety backup first
    if !worlds_has_known_max_column(conn)? {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }

        migrate_add_known_max_seconds(conn)?;
    }

    Ok(())
}
