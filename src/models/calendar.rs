use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Unit radixes of one world's calendar.
///
/// An instant (signed world-seconds from the epoch) only has a meaning
/// together with the CalendarConfig it was produced under; instants computed
/// under different configs must never be mixed. A changed world implies a new
/// CalendarConfig instance, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarConfig {
    pub seconds_per_hour: u64,
    pub hours_per_day: u64,
    pub days_per_month: u64,
    pub months_per_year: u64,
    /// Latest "now" known for this world (maximum recorded event time).
    /// Reference point for relative windows when no independent clock exists.
    pub known_max_seconds: Option<i64>,
}

pub const FALLBACK_SECONDS_PER_HOUR: u64 = 3600;
pub const FALLBACK_HOURS_PER_DAY: u64 = 24;
pub const FALLBACK_DAYS_PER_MONTH: u64 = 30;
pub const FALLBACK_MONTHS_PER_YEAR: u64 = 12;

impl CalendarConfig {
    /// Build a calendar from world-supplied radixes.
    /// Every radix must be strictly positive; a zero or negative radix makes
    /// conversion undefined and is rejected here rather than downstream.
    pub fn new(
        seconds_per_hour: i64,
        hours_per_day: i64,
        days_per_month: i64,
        months_per_year: i64,
        known_max_seconds: Option<i64>,
    ) -> AppResult<Self> {
        let check = |name: &str, v: i64| -> AppResult<u64> {
            if v <= 0 {
                Err(AppError::NonPositiveRadix(format!("{} = {}", name, v)))
            } else {
                Ok(v as u64)
            }
        };

        Ok(Self {
            seconds_per_hour: check("seconds_per_hour", seconds_per_hour)?,
            hours_per_day: check("hours_per_day", hours_per_day)?,
            days_per_month: check("days_per_month", days_per_month)?,
            months_per_year: check("months_per_year", months_per_year)?,
            known_max_seconds,
        })
    }

    /// Degraded calendar used only when a world supplies no settings at all
    /// (approximate 360-day year). Callers needing "now" in this mode use
    /// wall-clock time, never world-seconds.
    pub fn fallback() -> Self {
        Self {
            seconds_per_hour: FALLBACK_SECONDS_PER_HOUR,
            hours_per_day: FALLBACK_HOURS_PER_DAY,
            days_per_month: FALLBACK_DAYS_PER_MONTH,
            months_per_year: FALLBACK_MONTHS_PER_YEAR,
            known_max_seconds: None,
        }
    }

    pub fn seconds_per_day(&self) -> u64 {
        self.hours_per_day.saturating_mul(self.seconds_per_hour)
    }

    pub fn seconds_per_month(&self) -> u64 {
        self.days_per_month.saturating_mul(self.seconds_per_day())
    }

    pub fn seconds_per_year(&self) -> u64 {
        self.months_per_year.saturating_mul(self.seconds_per_month())
    }
}
