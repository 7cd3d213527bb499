//! Non-fatal signals returned alongside successful results.
//! An advisory informs the caller (and ultimately the user); it never blocks
//! the operation that produced it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A requested window bound was widened to include already-selected data.
    RangeAdjusted { requested: i64, widened_to: i64 },

    /// A resolved window matched more records than the density threshold.
    DenseWindow { matched: usize, threshold: usize },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::RangeAdjusted {
                requested,
                widened_to,
            } => format!(
                "Requested bound {} was widened to {} to keep selected events in range",
                requested, widened_to
            ),
            Advisory::DenseWindow { matched, threshold } => format!(
                "Window matches {} events (threshold {}); consider narrowing the range",
                matched, threshold
            ),
        }
    }
}
