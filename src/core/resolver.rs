//! Range resolution: turn a user intent ("last 7 days", explicit bounds,
//! unlimited) into a TimeWindow, and keep windows consistent with whatever
//! events are currently selected.
//!
//! Every function here is pure and total for well-formed inputs; none
//! performs I/O.

use crate::core::advisory::Advisory;
use crate::models::calendar::CalendarConfig;
use crate::models::unit::Unit;
use crate::models::window::TimeWindow;

/// Fixed one-instant buffer (in world-seconds) applied when a window bound
/// is widened to include already-selected events.
pub const SELECTION_BUFFER_SECONDS: i64 = 1000;

/// Default minimum window span: one fallback-calendar day. A sub-day window
/// would starve the event-retrieval side of candidates.
pub const DEFAULT_MINIMUM_SPAN_SECONDS: i64 = 86_400;

/// Reference point for relative windows.
///
/// A world normally supplies its recorded maximum event time. When it has no
/// calendar at all, wall-clock "now" stands in, but only together with the
/// fallback calendar; resolving wall-clock time against a world-supplied
/// calendar mixes two clocks and is a caller error this core cannot detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    WorldMax(i64),
    WallClockFallback,
}

impl Reference {
    pub fn resolve(&self) -> i64 {
        match self {
            Reference::WorldMax(seconds) => *seconds,
            Reference::WallClockFallback => chrono::Utc::now().timestamp(),
        }
    }
}

pub fn unit_seconds(unit: Unit, cfg: &CalendarConfig) -> i64 {
    match unit {
        Unit::Day => cfg.seconds_per_day() as i64,
        Unit::Week => 7 * cfg.seconds_per_day() as i64,
        Unit::Month => cfg.seconds_per_month() as i64,
        Unit::Year => cfg.seconds_per_year() as i64,
    }
}

/// Start bound for a "last N units" window counted back from `reference`.
pub fn last_n_units(cfg: &CalendarConfig, reference: i64, value: u64, unit: Unit) -> i64 {
    reference.saturating_sub((value as i64).saturating_mul(unit_seconds(unit, cfg)))
}

/// Widen a candidate start so it does not cut off the earliest selected
/// event. Returns the (possibly adjusted) start and an advisory when the
/// adjustment happened.
pub fn clamp_start_against_selection(
    candidate_start: i64,
    selected_min: i64,
) -> (i64, Option<Advisory>) {
    if candidate_start > selected_min {
        let widened = selected_min - SELECTION_BUFFER_SECONDS;
        (
            widened,
            Some(Advisory::RangeAdjusted {
                requested: candidate_start,
                widened_to: widened,
            }),
        )
    } else {
        (candidate_start, None)
    }
}

/// Symmetric to [`clamp_start_against_selection`] for the end bound.
pub fn clamp_end_against_selection(
    candidate_end: i64,
    selected_max: i64,
) -> (i64, Option<Advisory>) {
    if candidate_end < selected_max {
        let widened = selected_max + SELECTION_BUFFER_SECONDS;
        (
            widened,
            Some(Advisory::RangeAdjusted {
                requested: candidate_end,
                widened_to: widened,
            }),
        )
    } else {
        (candidate_end, None)
    }
}

/// Stretch the end bound so a bounded window never spans less than
/// `minimum_seconds`. Start stays unchanged.
pub fn enforce_minimum_span(window: TimeWindow, minimum_seconds: i64) -> TimeWindow {
    if let (Some(start), Some(end)) = (window.start, window.end)
        && end - start < minimum_seconds
    {
        return TimeWindow::new(Some(start), Some(start + minimum_seconds));
    }
    window
}

pub fn unlimited() -> TimeWindow {
    TimeWindow::default()
}
