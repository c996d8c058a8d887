//! JSON dataset parsing.

use crate::event::{Event, EventFields};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::io::Read;
use streamdash_common::{Result, StreamDashError};
use tracing::{debug, warn};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an event timestamp.
///
/// Offset-bearing timestamps keep their local wall-clock time and drop the
/// offset. Naive timestamps are taken as-is and a bare date means midnight.
/// Anything else is `None`.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Identifier that may be encoded as text or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Identifier {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

/// One record of the dataset as stored on disk.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(default)]
    show_id: Option<Identifier>,
    #[serde(default)]
    user_id: Option<Identifier>,
    #[serde(default)]
    created_date: Option<String>,
    #[serde(default)]
    user_watch_duration_seconds: Option<f64>,
    #[serde(default)]
    show_duration_seconds: Option<f64>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    show_genre: Option<String>,
    #[serde(default)]
    show_rating: Option<String>,
    #[serde(default)]
    show_type: Option<String>,
    #[serde(default)]
    show_name: Option<String>,
}

impl EventRecord {
    fn into_event(self) -> Event {
        Event::from_fields(EventFields {
            show_id: self.show_id.map(Identifier::into_string).unwrap_or_default(),
            user_id: self.user_id.map(Identifier::into_string).unwrap_or_default(),
            created_date: self.created_date.as_deref().and_then(parse_timestamp),
            user_watch_duration_seconds: self.user_watch_duration_seconds.unwrap_or(f64::NAN),
            show_duration_seconds: self.show_duration_seconds.unwrap_or(f64::NAN),
            state: self.state.unwrap_or_default(),
            timezone: self.timezone.unwrap_or_default(),
            show_genre: self.show_genre.unwrap_or_default(),
            show_rating: self.show_rating.unwrap_or_default(),
            show_type: self.show_type.unwrap_or_default(),
            show_name: self.show_name.unwrap_or_default(),
        })
    }
}

/// Reads a JSON array of event records and derives every event.
pub(crate) fn read_events<R: Read>(reader: R) -> Result<Vec<Event>> {
    let records: Vec<EventRecord> = serde_json::from_reader(reader)
        .map_err(|e| StreamDashError::data_with_source("Failed to parse event dataset", e))?;

    let events: Vec<Event> = records.into_iter().map(EventRecord::into_event).collect();

    let missing_timestamps = events.iter().filter(|e| e.created_date.is_none()).count();
    if missing_timestamps > 0 {
        warn!(
            missing_timestamps,
            "Events without a usable timestamp are excluded from time series"
        );
    }

    let missing_percentage = events.iter().filter(|e| e.percentage_watched.is_none()).count();
    debug!(
        events = events.len(),
        missing_percentage, "Parsed event dataset"
    );

    Ok(events)
}
