//! Configuration schema definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use streamdash_common::{Granularity, LogFormat, LoggingConfig, Measure, StreamDashError};
use validator::{Validate, ValidationError, ValidationErrors};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Dataset location.
    #[validate(nested)]
    pub data: DataConfig,

    /// Dashboard defaults applied when a request leaves a parameter unset.
    #[validate(nested)]
    pub dashboard: DashboardConfig,

    /// Presentation settings.
    #[validate(nested)]
    pub output: OutputConfig,

    /// Logging settings.
    #[validate(nested)]
    pub logging: LoggingSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the JSON event dataset.
    #[validate(custom(function = "crate::validator::validate_file_path"))]
    pub path: String,
}

/// Dashboard defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Timeframe used when none is selected.
    pub default_timeframe: Granularity,

    /// First day of the default date range.
    pub default_start_date: Option<NaiveDate>,

    /// Last day of the default date range.
    pub default_end_date: Option<NaiveDate>,

    /// Numeric column summed by every chart.
    pub measure: Measure,

    /// Number of shows kept by the "by show" chart.
    #[validate(range(min = 1, max = 50, message = "Top shows limit must be between 1 and 50"))]
    pub top_shows_limit: usize,

    /// Charts computed on each apply.
    pub charts: EnabledChartsConfig,
}

/// Which charts the dashboard computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledChartsConfig {
    /// Total watch duration line chart.
    pub total_watch_duration: bool,
    /// Watch duration by timezone.
    pub watch_by_timezone: bool,
    /// Watch duration by show type.
    pub watch_by_type: bool,
    /// Watch duration of the top shows.
    pub watch_by_show: bool,
}

/// How the binary renders chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned text table per chart.
    #[default]
    Table,
    /// A single JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = StreamDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(StreamDashError::invalid_argument(
                format!("unknown output format '{other}'"),
                "format",
            )),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format.
    pub format: OutputFormat,

    /// Decimal places printed for values.
    #[validate(range(max = 6, message = "Decimals cannot exceed 6"))]
    pub decimals: usize,
}

/// Logging settings as they appear in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    #[validate(custom(function = "crate::validator::validate_log_level"))]
    pub level: String,

    /// Optional log file; console output is used otherwise.
    #[validate(custom(function = "crate::validator::validate_file_path"))]
    pub file: Option<String>,

    /// Line format.
    pub format: LogFormat,

    /// Whether console output is colored.
    pub colored: bool,
}

impl LoggingSettings {
    /// Converts the file settings into the logging subsystem's configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ansi: self.colored,
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Runs field validation plus the cross-field checks.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        self.dashboard.validate_date_range()?;
        Ok(())
    }
}

impl DashboardConfig {
    /// Checks that the default date range is not inverted.
    pub fn validate_date_range(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let (Some(start), Some(end)) = (self.default_start_date, self.default_end_date) {
            if let Err(err) = crate::validator::validate_date_order(start, end) {
                errors.add("default_start_date", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Builds a validation error carrying a readable message.
pub(crate) fn validation_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}
