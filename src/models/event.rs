use chrono::Local;
use serde::Serialize;

/// A timestamped narrative event on a world's timeline.
/// `seconds` is the only persisted representation of the time point.
#[derive(Debug, Clone, Serialize)]
pub struct WorldEvent {
    pub id: i64,
    pub world_id: i64,
    pub title: String,
    pub seconds: i64,
    pub source: String,
    pub created_at: String,
}

impl WorldEvent {
    /// High-level constructor for events created from the CLI.
    pub fn new(world_id: i64, title: &str, seconds: i64) -> Self {
        Self {
            id: 0,
            world_id,
            title: title.to_string(),
            seconds,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}
