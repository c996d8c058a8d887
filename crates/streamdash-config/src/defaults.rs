//! Default values for every configuration section.

use crate::schema::*;
use chrono::NaiveDate;
use streamdash_common::{Granularity, LogFormat, Measure};

/// Dataset path used when nothing is configured.
pub const DEFAULT_DATA_PATH: &str = "data/streaming_data.json";

/// Number of shows the "by show" chart keeps.
pub const DEFAULT_TOP_SHOWS_LIMIT: usize = 5;

/// Default date range of the dashboard, inclusive.
pub fn default_date_range() -> (Option<NaiveDate>, Option<NaiveDate>) {
    (
        NaiveDate::from_ymd_opt(2024, 10, 10),
        NaiveDate::from_ymd_opt(2025, 4, 8),
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            dashboard: DashboardConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let (default_start_date, default_end_date) = default_date_range();
        Self {
            default_timeframe: Granularity::Monthly,
            default_start_date,
            default_end_date,
            measure: Measure::WatchMinutes,
            top_shows_limit: DEFAULT_TOP_SHOWS_LIMIT,
            charts: EnabledChartsConfig::default(),
        }
    }
}

impl Default for EnabledChartsConfig {
    fn default() -> Self {
        Self {
            total_watch_duration: true,
            watch_by_timezone: true,
            watch_by_type: true,
            watch_by_show: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            decimals: 1,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: LogFormat::Compact,
            colored: true,
        }
    }
}
