//! Converter-neutral event payload.
//!
//! Converters receive these events through the `ConvertibleEventFactory`.
//! The library performs no recurrence or timezone arithmetic on them;
//! sources and callers decide how events come into existence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event (converter-neutral)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    /// Create an event with a generated uid.
    pub fn new(summary: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Event {
            uid: format!("{}@calconv", Uuid::new_v4()),
            summary: summary.to_string(),
            description: None,
            location: None,
            start,
            end,
        }
    }
}
