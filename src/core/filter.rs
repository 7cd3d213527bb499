//! Apply a resolved window to a collection of timestamped records.

use crate::core::advisory::Advisory;
use crate::models::window::TimeWindow;
use std::cmp::Reverse;

/// Soft density threshold: above this many matches the caller is advised to
/// suggest narrowing the window. A configuration constant, not a hard limit.
pub const DEFAULT_DENSITY_THRESHOLD: usize = 10;

/// Keep the ids of records whose timestamp falls inside the window, sorted
/// by timestamp descending (ties keep input order, the sort is stable).
///
/// Pure: the same window is commonly re-applied after the record set
/// changes. Returns a `DenseWindow` advisory when the result exceeds the
/// threshold.
pub fn apply(
    window: &TimeWindow,
    records: &[(i64, i64)],
    density_threshold: usize,
) -> (Vec<i64>, Option<Advisory>) {
    let mut kept: Vec<(i64, i64)> = records
        .iter()
        .copied()
        .filter(|(_, seconds)| window.contains(*seconds))
        .collect();

    kept.sort_by_key(|(_, seconds)| Reverse(*seconds));

    let ids: Vec<i64> = kept.into_iter().map(|(id, _)| id).collect();

    let advisory = (ids.len() > density_threshold).then_some(Advisory::DenseWindow {
        matched: ids.len(),
        threshold: density_threshold,
    });

    (ids, advisory)
}
