//! Immutable in-memory event table.

use crate::event::Event;
use crate::loader::read_events;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use streamdash_common::{Dimension, Result, StreamDashError};
use tracing::{info, instrument};

static GLOBAL_STORE: OnceCell<EventStore> = OnceCell::new();

/// Read-only table of viewing events, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Wraps already derived events.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parses a JSON array of event records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_events(read_events(reader)?))
    }

    /// Loads the dataset at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            StreamDashError::data_with_source(
                format!("Failed to open dataset '{}'", path.display()),
                e,
            )
        })?;

        let store = Self::from_reader(BufReader::new(file))?;
        info!(events = store.len(), "Loaded event dataset");
        Ok(store)
    }

    /// Installs the process-wide store. Only the first call succeeds.
    pub fn init_global(store: Self) -> Result<&'static Self> {
        GLOBAL_STORE
            .set(store)
            .map_err(|_| StreamDashError::config("Event store is already initialized"))?;
        Self::global()
    }

    /// The process-wide store installed by [`EventStore::init_global`].
    pub fn global() -> Result<&'static Self> {
        GLOBAL_STORE
            .get()
            .ok_or_else(|| StreamDashError::config("Event store has not been initialized"))
    }

    /// All events, in dataset order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the dataset has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First and last calendar date covered by timestamped events.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .events
            .iter()
            .filter_map(|event| event.created_date.map(|ts| ts.date()));

        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        }))
    }

    /// Sorted distinct non-empty values of a categorical column.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.dimension(dimension))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
