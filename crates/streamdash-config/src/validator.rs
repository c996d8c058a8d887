//! Field validators used by the schema's `validator` derives.

use crate::schema::{validation_error, Config};
use chrono::NaiveDate;
use streamdash_common::{Result, StreamDashError};
use validator::ValidationError;

/// Log levels accepted in the configuration file.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validates a log level name.
pub fn validate_log_level(level: &str) -> std::result::Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(validation_error(
            "invalid_log_level",
            format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
        ))
    }
}

/// Validates a file path (non-empty, no characters rejected by common filesystems).
pub fn validate_file_path(path: &str) -> std::result::Result<(), ValidationError> {
    if path.trim().is_empty() {
        return Err(validation_error("empty_file_path", "File path cannot be empty".to_string()));
    }

    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(validation_error(
            "invalid_file_path_characters",
            format!("File path '{path}' contains invalid characters"),
        ));
    }

    Ok(())
}

/// Validates that a date range is not inverted.
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> std::result::Result<(), ValidationError> {
    if start <= end {
        Ok(())
    } else {
        Err(validation_error(
            "start_after_end",
            format!("Start date {start} is after end date {end}"),
        ))
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting failures as a validation error.
    pub fn validate(config: &Config) -> Result<()> {
        config
            .validate_all()
            .map_err(|e| StreamDashError::validation(format!("Invalid configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_log_level() {
        for level in LOG_LEVELS {
            assert!(validate_log_level(level).is_ok(), "{level} should be valid");
        }
        assert!(validate_log_level("INFO").is_ok());
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("data/streaming_data.json").is_ok());
        assert!(validate_file_path("/var/log/streamdash.log").is_ok());
        assert!(validate_file_path("C:\\data\\events.json").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("   ").is_err());
        assert!(validate_file_path("events?.json").is_err());
        assert!(validate_file_path("events|x.json").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let first = NaiveDate::from_ymd_opt(2024, 10, 10).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();

        assert!(validate_date_order(first, last).is_ok());
        assert!(validate_date_order(first, first).is_ok());
        assert!(validate_date_order(last, first).is_err());
    }

    #[test]
    fn test_config_validator_reports_validation_error() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, StreamDashError::Validation { .. }));
    }
}
