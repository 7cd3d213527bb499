//! Parsing of user-typed date strings and relative-range expressions.

use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarConfig;
use crate::models::date::WorldDate;
use crate::models::unit::Unit;
use regex::Regex;

/// Parse a date string into a structured date.
///
/// Two accepted forms:
/// 1. standard: `BC 100-1-1` / `AD 100-1-1` (era marker, case-insensitive)
/// 2. simplified: `-100-1-1` / `100-1-1` (leading minus means BC)
///
/// Month and day are validated against the calendar bounds; hour defaults
/// to 0.
pub fn parse_world_date(input: &str, cfg: &CalendarConfig) -> AppResult<WorldDate> {
    let s = input.trim();

    let standard = Regex::new(r"^(?i)(BC|AD)\s*(\d+)-(\d+)-(\d+)$").unwrap();
    let simplified = Regex::new(r"^(-?)(\d+)-(\d+)-(\d+)$").unwrap();

    let (is_bc, year, month, day) = if let Some(caps) = standard.captures(s) {
        let is_bc = caps[1].eq_ignore_ascii_case("bc");
        (
            is_bc,
            parse_field(&caps[2], s)?,
            parse_field(&caps[3], s)?,
            parse_field(&caps[4], s)?,
        )
    } else if let Some(caps) = simplified.captures(s) {
        let is_bc = &caps[1] == "-";
        (
            is_bc,
            parse_field(&caps[2], s)?,
            parse_field(&caps[3], s)?,
            parse_field(&caps[4], s)?,
        )
    } else {
        return Err(AppError::InvalidDateString(format!(
            "'{}' (expected 'BC Y-M-D', 'AD Y-M-D' or a signed 'Y-M-D')",
            s
        )));
    };

    if month < 1 || month > cfg.months_per_year {
        return Err(AppError::InvalidDateString(format!(
            "month {} out of range 1..={}",
            month, cfg.months_per_year
        )));
    }
    if day < 1 || day > cfg.days_per_month {
        return Err(AppError::InvalidDateString(format!(
            "day {} out of range 1..={}",
            day, cfg.days_per_month
        )));
    }

    Ok(WorldDate::new(is_bc, year, month, day, 0))
}

/// Parse a relative-range expression like `7d`, `2 weeks`, `1y`.
pub fn parse_last_expr(input: &str) -> AppResult<(u64, Unit)> {
    let re = Regex::new(r"^(\d+)\s*([a-zA-Z]+)$").unwrap();

    let caps = re
        .captures(input.trim())
        .ok_or_else(|| AppError::InvalidUnit(format!("'{}' (expected e.g. '7d', '2 weeks')", input)))?;

    let value: u64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidUnit(format!("'{}' (count too large)", input)))?;

    let unit = Unit::from_str(&caps[2])
        .ok_or_else(|| AppError::InvalidUnit(format!("'{}' (unknown unit '{}')", input, &caps[2])))?;

    Ok((value, unit))
}

fn parse_field(digits: &str, whole: &str) -> AppResult<u64> {
    digits
        .parse()
        .map_err(|_| AppError::InvalidDateString(format!("'{}' (field too large)", whole)))
}
