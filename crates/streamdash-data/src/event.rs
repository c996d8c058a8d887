//! Viewing event model and derived fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use streamdash_common::{Dimension, Measure, StreamDashError};

/// Percentage-watched bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PercentageCategory {
    /// 0% up to and including 25%.
    #[serde(rename = "0-25%")]
    UpToQuarter,
    /// Above 25% up to and including 50%.
    #[serde(rename = "26-50%")]
    UpToHalf,
    /// Above 50% up to and including 75%.
    #[serde(rename = "51-75%")]
    UpToThreeQuarters,
    /// Above 75% up to and including 100%.
    #[serde(rename = "76-100%")]
    UpToFull,
}

impl PercentageCategory {
    /// Every bucket, lowest first.
    pub const ALL: [Self; 4] = [
        Self::UpToQuarter,
        Self::UpToHalf,
        Self::UpToThreeQuarters,
        Self::UpToFull,
    ];

    /// Bins a percentage with boundaries `[0, 25, 50, 75, 100]`.
    ///
    /// The lowest bin includes 0 and every bin includes its upper edge, so
    /// `25.0` is `"0-25%"` and `25.0001` is `"26-50%"`. Values outside
    /// `[0, 100]` and NaN have no bucket.
    pub fn from_percentage(percentage: f64) -> Option<Self> {
        if !(0.0..=100.0).contains(&percentage) {
            return None;
        }

        let category = if percentage <= 25.0 {
            Self::UpToQuarter
        } else if percentage <= 50.0 {
            Self::UpToHalf
        } else if percentage <= 75.0 {
            Self::UpToThreeQuarters
        } else {
            Self::UpToFull
        };
        Some(category)
    }

    /// Bucket label, e.g. `"26-50%"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToQuarter => "0-25%",
            Self::UpToHalf => "26-50%",
            Self::UpToThreeQuarters => "51-75%",
            Self::UpToFull => "76-100%",
        }
    }
}

impl fmt::Display for PercentageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PercentageCategory {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| {
                StreamDashError::validation_field(
                    format!("unknown percentage bucket '{s}', expected one of 0-25%, 26-50%, 51-75%, 76-100%"),
                    "percentage",
                )
            })
    }
}

/// Rounded percentage of the show that was watched.
///
/// Rounds half to even. `None` when the show duration is not positive or
/// either input is missing.
pub fn percentage_watched(user_watch_seconds: f64, show_duration_seconds: f64) -> Option<f64> {
    if show_duration_seconds.is_nan() || show_duration_seconds <= 0.0 || !user_watch_seconds.is_finite() {
        return None;
    }
    Some((user_watch_seconds / show_duration_seconds * 100.0).round_ties_even())
}

/// One viewing session, with its derived fields.
///
/// Missing durations are stored as NaN and contribute nothing to sums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Show identifier.
    pub show_id: String,
    /// Viewer identifier.
    pub user_id: String,
    /// Session timestamp; `None` when missing or unparseable.
    pub created_date: Option<NaiveDateTime>,
    /// Seconds watched.
    pub user_watch_duration_seconds: f64,
    /// Length of the show in seconds.
    pub show_duration_seconds: f64,
    /// Seconds watched divided by 60.
    pub watch_minutes: f64,
    /// Rounded percentage of the show watched.
    pub percentage_watched: Option<f64>,
    /// Bucket of `percentage_watched`.
    pub percentage_category: Option<PercentageCategory>,
    /// Viewer's state.
    pub state: String,
    /// Viewer's timezone.
    pub timezone: String,
    /// Show genre.
    pub show_genre: String,
    /// Show content rating.
    pub show_rating: String,
    /// Show type.
    pub show_type: String,
    /// Show title.
    pub show_name: String,
}

/// Raw fields of an event before derivation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFields {
    /// Show identifier.
    pub show_id: String,
    /// Viewer identifier.
    pub user_id: String,
    /// Session timestamp.
    pub created_date: Option<NaiveDateTime>,
    /// Seconds watched, NaN when missing.
    pub user_watch_duration_seconds: f64,
    /// Length of the show in seconds, NaN when missing.
    pub show_duration_seconds: f64,
    /// Viewer's state.
    pub state: String,
    /// Viewer's timezone.
    pub timezone: String,
    /// Show genre.
    pub show_genre: String,
    /// Show content rating.
    pub show_rating: String,
    /// Show type.
    pub show_type: String,
    /// Show title.
    pub show_name: String,
}

impl Event {
    /// Builds an event and computes its derived fields.
    pub fn from_fields(fields: EventFields) -> Self {
        let percentage = percentage_watched(
            fields.user_watch_duration_seconds,
            fields.show_duration_seconds,
        );

        Self {
            show_id: fields.show_id,
            user_id: fields.user_id,
            created_date: fields.created_date,
            user_watch_duration_seconds: fields.user_watch_duration_seconds,
            show_duration_seconds: fields.show_duration_seconds,
            watch_minutes: fields.user_watch_duration_seconds / 60.0,
            percentage_watched: percentage,
            percentage_category: percentage.and_then(PercentageCategory::from_percentage),
            state: fields.state,
            timezone: fields.timezone,
            show_genre: fields.show_genre,
            show_rating: fields.show_rating,
            show_type: fields.show_type,
            show_name: fields.show_name,
        }
    }

    /// Value of a numeric column, `None` when it is missing on this row.
    pub fn measure(&self, measure: Measure) -> Option<f64> {
        let value = match measure {
            Measure::WatchMinutes => self.watch_minutes,
            Measure::UserWatchDurationSeconds => self.user_watch_duration_seconds,
            Measure::ShowDurationSeconds => self.show_duration_seconds,
            Measure::PercentageWatched => self.percentage_watched?,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Value of a categorical column, `None` when it has no value.
    pub fn dimension(&self, dimension: Dimension) -> Option<&str> {
        let value = match dimension {
            Dimension::State => self.state.as_str(),
            Dimension::Timezone => self.timezone.as_str(),
            Dimension::ShowGenre => self.show_genre.as_str(),
            Dimension::ShowRating => self.show_rating.as_str(),
            Dimension::ShowType => self.show_type.as_str(),
            Dimension::ShowName => self.show_name.as_str(),
            Dimension::PercentageCategory => self.percentage_category?.label(),
        };
        (!value.is_empty()).then_some(value)
    }
}
