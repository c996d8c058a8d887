//! Event fixtures for tests across the workspace.

use crate::event::{Event, EventFields};
use chrono::{NaiveDate, NaiveDateTime};

/// Builder for test events with sensible defaults.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    fields: EventFields,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBuilder {
    /// A 10 minute session of a 20 minute show on 2024-03-01 at noon.
    pub fn new() -> Self {
        Self {
            fields: EventFields {
                show_id: "show-1".to_string(),
                user_id: "user-1".to_string(),
                created_date: NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(12, 0, 0)),
                user_watch_duration_seconds: 600.0,
                show_duration_seconds: 1200.0,
                state: "Texas".to_string(),
                timezone: "CST".to_string(),
                show_genre: "Drama".to_string(),
                show_rating: "PG".to_string(),
                show_type: "Series".to_string(),
                show_name: "Harbor Lights".to_string(),
            },
        }
    }

    /// Sets the session to noon of the given date.
    pub fn at(mut self, year: i32, month: u32, day: u32) -> Self {
        self.fields.created_date =
            NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(12, 0, 0));
        self
    }

    /// Sets the exact session timestamp.
    pub fn at_time(mut self, timestamp: NaiveDateTime) -> Self {
        self.fields.created_date = Some(timestamp);
        self
    }

    /// Removes the timestamp.
    pub fn without_timestamp(mut self) -> Self {
        self.fields.created_date = None;
        self
    }

    /// Sets the watched and total seconds.
    pub fn watched(mut self, user_seconds: f64, show_seconds: f64) -> Self {
        self.fields.user_watch_duration_seconds = user_seconds;
        self.fields.show_duration_seconds = show_seconds;
        self
    }

    /// Sets the watched time in minutes, keeping the show length.
    pub fn minutes(mut self, minutes: f64) -> Self {
        self.fields.user_watch_duration_seconds = minutes * 60.0;
        self
    }

    /// Sets the viewer state.
    pub fn state(mut self, state: &str) -> Self {
        self.fields.state = state.to_string();
        self
    }

    /// Sets the viewer timezone.
    pub fn timezone(mut self, timezone: &str) -> Self {
        self.fields.timezone = timezone.to_string();
        self
    }

    /// Sets the show genre.
    pub fn genre(mut self, genre: &str) -> Self {
        self.fields.show_genre = genre.to_string();
        self
    }

    /// Sets the show rating.
    pub fn rating(mut self, rating: &str) -> Self {
        self.fields.show_rating = rating.to_string();
        self
    }

    /// Sets the show type.
    pub fn show_type(mut self, show_type: &str) -> Self {
        self.fields.show_type = show_type.to_string();
        self
    }

    /// Sets the show title.
    pub fn show(mut self, name: &str) -> Self {
        self.fields.show_name = name.to_string();
        self
    }

    /// Derives the event.
    pub fn build(self) -> Event {
        Event::from_fields(self.fields)
    }
}

/// A small dataset spanning March and April 2024.
pub fn sample_dataset_json() -> &'static str {
    r#"[
  {"show_id": 1, "user_id": 10, "created_date": "2024-03-05T20:00:00", "user_watch_duration_seconds": 600, "show_duration_seconds": 1200, "state": "Texas", "timezone": "CST", "show_genre": "Drama", "show_rating": "PG-13", "show_type": "Series", "show_name": "Harbor Lights"},
  {"show_id": 2, "user_id": 11, "created_date": "2024-03-17T09:30:00", "user_watch_duration_seconds": 1200, "show_duration_seconds": 1200, "state": "California", "timezone": "PST", "show_genre": "Comedy", "show_rating": "PG", "show_type": "Movie", "show_name": "Laugh Track"},
  {"show_id": 1, "user_id": 12, "created_date": "2024-03-31T23:59:59", "user_watch_duration_seconds": 300, "show_duration_seconds": 1200, "state": "Texas", "timezone": "CST", "show_genre": "Drama", "show_rating": "PG-13", "show_type": "Series", "show_name": "Harbor Lights"},
  {"show_id": 3, "user_id": 10, "created_date": "2024-04-02T18:00:00", "user_watch_duration_seconds": 2400, "show_duration_seconds": 3000, "state": "New York", "timezone": "EST", "show_genre": "Action", "show_rating": "R", "show_type": "Movie", "show_name": "Night Run"},
  {"show_id": 2, "user_id": 13, "created_date": "2024-04-20T21:15:00", "user_watch_duration_seconds": 900, "show_duration_seconds": 1200, "state": "California", "timezone": "PST", "show_genre": "Comedy", "show_rating": "PG", "show_type": "Movie", "show_name": "Laugh Track"},
  {"show_id": 4, "user_id": 14, "created_date": "unknown", "user_watch_duration_seconds": 1800, "show_duration_seconds": 1800, "state": "Florida", "timezone": "EST", "show_genre": "Horror", "show_rating": "R", "show_type": "Series", "show_name": "Cellar Door"}
]"#
}
