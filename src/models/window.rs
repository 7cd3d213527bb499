use serde::Serialize;

/// Optionally-bounded interval of world-seconds.
/// `None` means "unbounded on that side". When both bounds are present the
/// resolver guarantees `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl TimeWindow {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, seconds: i64) -> bool {
        self.start.is_none_or(|s| seconds >= s) && self.end.is_none_or(|e| seconds <= e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
