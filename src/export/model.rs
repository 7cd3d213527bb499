use serde::Serialize;

/// Flat record for event export.
/// `world_date` is the formatted calendar rendering when the world defines a
/// calendar, the identity `timepoint: N` rendering otherwise.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub world: String,
    pub title: String,
    pub seconds: i64,
    pub world_date: String,
    pub source: String,
    pub created_at: String,
}

/// Headers for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "world",
        "title",
        "seconds",
        "world_date",
        "source",
        "created_at",
    ]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.world.clone(),
        e.title.clone(),
        e.seconds.to_string(),
        e.world_date.clone(),
        e.source.clone(),
        e.created_at.clone(),
    ]
}

pub(crate) fn events_to_table(events: &[EventExport]) -> Vec<Vec<String>> {
    events.iter().map(event_to_row).collect()
}
