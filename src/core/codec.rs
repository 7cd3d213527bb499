//! Pure conversion engine between world-seconds and structured dates.
//!
//! An instant is a signed count of seconds from the world's epoch (0).
//! Negative instants are "before the epoch" (BC). Conversion resolves to
//! hour granularity; the reserved minute/second fields stay 0.

use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarConfig;
use crate::models::date::WorldDate;

/// Decompose an instant into a structured date.
///
/// Total function: every i64 instant has a representation, and ordering is
/// preserved. Decomposition divides the magnitude from the largest unit down;
/// month and day come out 1-based whenever the calendar radixes are positive.
pub fn to_world_date(instant: i64, cfg: &CalendarConfig) -> WorldDate {
    let is_bc = instant < 0;
    let magnitude = instant.unsigned_abs();

    let year = magnitude / cfg.seconds_per_year();
    let r1 = magnitude % cfg.seconds_per_year();
    let month = r1 / cfg.seconds_per_month() + 1;
    let r2 = r1 % cfg.seconds_per_month();
    let day = r2 / cfg.seconds_per_day() + 1;
    let r3 = r2 % cfg.seconds_per_day();
    let hour = r3 / cfg.seconds_per_hour;
    // sub-hour remainder discarded: hour granularity

    WorldDate::new(is_bc, year, month, day, hour)
}

/// Recompose a structured date into an instant.
///
/// Exact inverse of [`to_world_date`] at hour granularity. Rejects a date
/// whose month/day/hour fall outside the calendar-implied bounds, so callers
/// cannot silently construct an out-of-range date.
pub fn to_instant(date: &WorldDate, cfg: &CalendarConfig) -> AppResult<i64> {
    if date.month < 1 || date.month > cfg.months_per_year {
        return Err(AppError::InvalidWorldDate(format!(
            "month {} out of range 1..={}",
            date.month, cfg.months_per_year
        )));
    }
    if date.day < 1 || date.day > cfg.days_per_month {
        return Err(AppError::InvalidWorldDate(format!(
            "day {} out of range 1..={}",
            date.day, cfg.days_per_month
        )));
    }
    if date.hour >= cfg.hours_per_day {
        return Err(AppError::InvalidWorldDate(format!(
            "hour {} out of range 0..{}",
            date.hour, cfg.hours_per_day
        )));
    }

    let magnitude = date
        .year
        .checked_mul(cfg.seconds_per_year())
        .and_then(|t| t.checked_add((date.month - 1).checked_mul(cfg.seconds_per_month())?))
        .and_then(|t| t.checked_add((date.day - 1).checked_mul(cfg.seconds_per_day())?))
        .and_then(|t| t.checked_add(date.hour.checked_mul(cfg.seconds_per_hour)?))
        .ok_or_else(|| {
            AppError::InvalidWorldDate("date does not fit the 64-bit timeline".to_string())
        })?;

    let signed = if date.is_bc {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };

    i64::try_from(signed).map_err(|_| {
        AppError::InvalidWorldDate("date does not fit the 64-bit timeline".to_string())
    })
}

/// Stable rendering of a structured date: `BC 3-2-5` / `AD 3-2-5`.
/// The same (era, year, month, day) always formats identically.
pub fn format_world_date(date: &WorldDate) -> String {
    format!(
        "{} {}-{}-{}",
        date.era_str(),
        date.year,
        date.month,
        date.day
    )
}

pub fn format_instant(instant: i64, cfg: &CalendarConfig) -> String {
    format_world_date(&to_world_date(instant, cfg))
}

/// Identity rendering used when a world supplies no calendar: the raw
/// integer, never a guessed calendar.
pub fn format_raw_instant(instant: i64) -> String {
    format!("timepoint: {}", instant)
}
