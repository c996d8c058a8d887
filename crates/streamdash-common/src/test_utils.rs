//! Test utilities and shared test helpers for StreamDash.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a naive timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("invalid mock timestamp")
}

/// Test fixture for creating a calendar date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid mock date")
}

/// Create a temporary file holding `contents` that is removed on drop.
#[cfg(feature = "tempfile")]
pub fn create_temp_file_with(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
data:
  path: "data/streaming_data.json"
"#
    }

    /// Create a full configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "data:\n",
            "  path: \"fixtures/events.json\"\n",
            "\n",
            "dashboard:\n",
            "  default_timeframe: \"Weekly\"\n",
            "  default_start_date: \"2024-01-01\"\n",
            "  default_end_date: \"2024-06-30\"\n",
            "  measure: \"watch_minutes\"\n",
            "  top_shows_limit: 3\n",
            "  charts:\n",
            "    total_watch_duration: true\n",
            "    watch_by_timezone: true\n",
            "    watch_by_type: false\n",
            "    watch_by_show: true\n",
            "\n",
            "output:\n",
            "  format: \"json\"\n",
            "  decimals: 2\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  file: null\n",
            "  format: \"compact\"\n",
            "  colored: false\n",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_mock_timestamp() {
        let timestamp = mock_timestamp(2024, 3, 31, 23, 59, 59);
        assert_eq!(timestamp.year(), 2024);
        assert_eq!(timestamp.month(), 3);
        assert_eq!(timestamp.day(), 31);
        assert_eq!(timestamp.hour(), 23);
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }
}
