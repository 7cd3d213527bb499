use serde::Serialize;

/// Human-meaningful decomposition of an instant under one CalendarConfig.
///
/// Ephemeral value: produced by the codec on demand, never persisted on its
/// own (only the underlying instant is). `month` and `day` are 1-based,
/// `hour` is 0-based. `minute` and `second` are reserved fields, always 0;
/// the codec resolves to hour granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldDate {
    pub is_bc: bool,
    pub year: u64,
    pub month: u64,
    pub day: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
}

impl WorldDate {
    pub fn new(is_bc: bool, year: u64, month: u64, day: u64, hour: u64) -> Self {
        Self {
            is_bc,
            year,
            month,
            day,
            hour,
            minute: 0,
            second: 0,
        }
    }

    pub fn era_str(&self) -> &'static str {
        if self.is_bc { "BC" } else { "AD" }
    }
}
