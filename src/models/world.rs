use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarConfig;
use serde::Serialize;

/// A persisted world record: name, optional epoch display label, and the
/// optional calendar radix columns.
///
/// The four radix columns are nullable as a group: a world created without
/// calendar settings has all of them NULL and falls back to the degraded
/// default calendar for range arithmetic (identity formatting for display).
#[derive(Debug, Clone, Serialize)]
pub struct World {
    pub id: i64,
    pub name: String,
    pub epoch: Option<String>,
    pub seconds_per_hour: Option<i64>,
    pub hours_per_day: Option<i64>,
    pub days_per_month: Option<i64>,
    pub months_per_year: Option<i64>,
    pub known_max_seconds: Option<i64>,
    pub created_at: String,
}

impl World {
    /// Calendar supplied by this world, if any.
    ///
    /// - all radix columns NULL → `Ok(None)`: the world supplies no calendar
    ///   and the caller may substitute the fallback;
    /// - all present and positive → `Ok(Some(config))`;
    /// - partial or non-positive → error. An invalid calendar must never be
    ///   silently replaced by the fallback.
    pub fn calendar(&self) -> AppResult<Option<CalendarConfig>> {
        match (
            self.seconds_per_hour,
            self.hours_per_day,
            self.days_per_month,
            self.months_per_year,
        ) {
            (None, None, None, None) => Ok(None),
            (Some(sph), Some(hpd), Some(dpm), Some(mpy)) => Ok(Some(CalendarConfig::new(
                sph,
                hpd,
                dpm,
                mpy,
                self.known_max_seconds,
            )?)),
            _ => Err(AppError::IncompleteCalendar(self.name.clone())),
        }
    }

    pub fn has_calendar(&self) -> bool {
        self.seconds_per_hour.is_some()
            || self.hours_per_day.is_some()
            || self.days_per_month.is_some()
            || self.months_per_year.is_some()
    }
}
