use std::collections::BTreeMap;

/// A single performance entry scraped from the frontend source.
///
/// Fields are kept as the raw text spans found in the literal; no unescaping
/// or coercion happens at any point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: String,
    pub troupe: String,
    pub city: String,
    pub location: String,
    pub content: String,
}

impl Event {
    pub fn new(
        event_type: String,
        troupe: String,
        city: String,
        location: String,
        content: String,
    ) -> Self {
        Self {
            event_type,
            troupe,
            city,
            location,
            content,
        }
    }
}

/// Events grouped under their `YYYY-MM-DD` key. The key is only used for
/// grouping and ordering, never validated as a calendar date.
pub type EventCollection = BTreeMap<String, Vec<Event>>;
