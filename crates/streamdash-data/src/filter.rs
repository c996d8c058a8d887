//! Filter engine: a conjunction of "all"-or-value selections and a date range.

use crate::event::{Event, PercentageCategory};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use streamdash_common::{ensure, Result, StreamDashError};
use tracing::{debug, instrument};

/// Whether `input` is the "match everything" sentinel.
///
/// Empty input, `"all"` and labels such as `"All States"` all qualify.
pub fn is_all_sentinel(input: &str) -> bool {
    let input = input.trim();
    input.is_empty()
        || input.eq_ignore_ascii_case("all")
        || input
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("all "))
}

/// A categorical filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T = String> {
    /// Every value matches.
    All,
    /// Only rows equal to this value match.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selection<T> {
    /// Whether this selection lets every row through.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    /// Whether a row holding `value` passes. Rows without a value only pass `All`.
    pub fn admits<U>(&self, value: Option<&U>) -> bool
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        match self {
            Self::All => true,
            Self::Only(selected) => value.is_some_and(|v| selected == v),
        }
    }
}

impl Selection<String> {
    /// Parses a free-text selection.
    pub fn from_text(input: &str) -> Self {
        if is_all_sentinel(input) {
            Self::All
        } else {
            Self::Only(input.trim().to_string())
        }
    }
}

impl FromStr for Selection<PercentageCategory> {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self> {
        if is_all_sentinel(s) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `start` after `end` is a validation error.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        ensure!(
            start <= end,
            StreamDashError::validation_field(format!("start date {start} is after end date {end}"), "date_range")
        );
        Ok(Self { start, end })
    }

    /// First day of the range.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the timestamp's calendar date falls inside the range.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let date = timestamp.date();
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The full set of filters chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Inclusive date range; `None` keeps every event.
    pub date_range: Option<DateRange>,
    /// Viewer state.
    pub state: Selection,
    /// Viewer timezone.
    pub timezone: Selection,
    /// Percentage-watched bucket.
    pub percentage: Selection<PercentageCategory>,
    /// Show genre.
    pub genre: Selection,
    /// Show rating.
    pub rating: Selection,
}

impl FilterSelection {
    /// Whether an event passes every filter.
    pub fn matches(&self, event: &Event) -> bool {
        let in_range = match (self.date_range, event.created_date) {
            (None, _) => true,
            (Some(range), Some(timestamp)) => range.contains(timestamp),
            (Some(_), None) => false,
        };

        in_range
            && self.state.admits(non_empty(&event.state))
            && self.timezone.admits(non_empty(&event.timezone))
            && self.percentage.admits(event.percentage_category.as_ref())
            && self.genre.admits(non_empty(&event.show_genre))
            && self.rating.admits(non_empty(&event.show_rating))
    }

    /// Borrows the events that pass every filter, in their original order.
    #[instrument(skip(self, events), fields(total = events.len()))]
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let selected: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();
        debug!(selected = selected.len(), "Applied filters");
        selected
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
