//! Shared vocabulary types: timeframes, measures and breakdown dimensions.
//!
//! These are the parameters every layer agrees on. Each parses from the name
//! used in the dataset and on the command line, and an unknown name is an
//! [`StreamDashError::InvalidArgument`].

use crate::StreamDashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the period buckets an aggregation groups events into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Granularity {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per Sunday-to-Saturday week.
    Weekly,
    /// One bucket per calendar month.
    Monthly,
    /// One bucket per calendar quarter.
    Quarterly,
    /// One bucket per calendar year.
    Yearly,
}

impl Granularity {
    /// Every granularity, finest first.
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    /// Display name, as offered in the timeframe selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                StreamDashError::invalid_argument(
                    format!("unknown timeframe '{s}', expected one of Daily, Weekly, Monthly, Quarterly, Yearly"),
                    "timeframe",
                )
            })
    }
}

impl TryFrom<String> for Granularity {
    type Error = StreamDashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Numeric event column that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Measure {
    /// Watch duration in minutes.
    #[default]
    WatchMinutes,
    /// Raw watch duration in seconds.
    UserWatchDurationSeconds,
    /// Full length of the show in seconds.
    ShowDurationSeconds,
    /// Rounded percentage of the show that was watched.
    PercentageWatched,
}

impl Measure {
    /// Every measure.
    pub const ALL: [Self; 4] = [
        Self::WatchMinutes,
        Self::UserWatchDurationSeconds,
        Self::ShowDurationSeconds,
        Self::PercentageWatched,
    ];

    /// Column name in the event table.
    pub const fn column(self) -> &'static str {
        match self {
            Self::WatchMinutes => "watch_minutes",
            Self::UserWatchDurationSeconds => "user_watch_duration_seconds",
            Self::ShowDurationSeconds => "show_duration_seconds",
            Self::PercentageWatched => "percentage_watched",
        }
    }

    /// Axis label for charts of this measure.
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::WatchMinutes => "Watch Duration (minutes)",
            Self::UserWatchDurationSeconds => "Watch Duration (seconds)",
            Self::ShowDurationSeconds => "Show Duration (seconds)",
            Self::PercentageWatched => "Percentage Watched",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Measure {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.column() == s.trim())
            .ok_or_else(|| {
                StreamDashError::invalid_argument(
                    format!("unknown numeric column '{s}'"),
                    "value_column",
                )
            })
    }
}

impl TryFrom<String> for Measure {
    type Error = StreamDashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Categorical event column usable as a breakdown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Dimension {
    /// Viewer's state.
    State,
    /// Viewer's timezone.
    Timezone,
    /// Genre of the show.
    ShowGenre,
    /// Content rating of the show.
    ShowRating,
    /// Kind of show, e.g. movie or series.
    ShowType,
    /// Title of the show.
    ShowName,
    /// Percentage-watched bucket.
    PercentageCategory,
}

impl Dimension {
    /// Every dimension.
    pub const ALL: [Self; 7] = [
        Self::State,
        Self::Timezone,
        Self::ShowGenre,
        Self::ShowRating,
        Self::ShowType,
        Self::ShowName,
        Self::PercentageCategory,
    ];

    /// Column name in the event table.
    pub const fn column(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Timezone => "timezone",
            Self::ShowGenre => "show_genre",
            Self::ShowRating => "show_rating",
            Self::ShowType => "show_type",
            Self::ShowName => "show_name",
            Self::PercentageCategory => "percentage_category",
        }
    }

    /// Human readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::State => "State",
            Self::Timezone => "Timezone",
            Self::ShowGenre => "Genre",
            Self::ShowRating => "Rating",
            Self::ShowType => "Type",
            Self::ShowName => "Show",
            Self::PercentageCategory => "Percentage Watched",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Dimension {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.column() == s.trim())
            .ok_or_else(|| {
                StreamDashError::invalid_argument(
                    format!("unknown categorical column '{s}'"),
                    "group_by",
                )
            })
    }
}

impl TryFrom<String> for Dimension {
    type Error = StreamDashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
