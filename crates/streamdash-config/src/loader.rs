//! Configuration loading from YAML files and environment variables.

use crate::schema::Config;
use std::env;
use std::path::Path;
use std::str::FromStr;
use streamdash_common::{Result as StreamDashResult, StreamDashError};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "STREAMDASH_CONFIG_PATH";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the offending variable
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for StreamDashError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from a YAML file with environment variable overrides.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |name| env::var(name).ok())
    }

    /// Loads configuration from a YAML file, resolving overrides through `lookup`.
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;

        info!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads configuration using the standard lookup order.
    ///
    /// `STREAMDASH_CONFIG_PATH`, then `config.yaml`, then `config.yml`, then
    /// built-in defaults. Environment overrides apply in every case.
    pub fn load() -> StreamDashResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            debug!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StreamDashResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Applies process environment overrides to the configuration.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |name| env::var(name).ok())
    }

    /// Applies overrides read through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("STREAMDASH_DATA_PATH") {
            config.data.path = path;
        }

        if let Some(value) = lookup("STREAMDASH_TIMEFRAME") {
            config.dashboard.default_timeframe = parse_var("STREAMDASH_TIMEFRAME", &value)?;
        }

        if let Some(value) = lookup("STREAMDASH_START_DATE") {
            config.dashboard.default_start_date = Some(parse_var("STREAMDASH_START_DATE", &value)?);
        }

        if let Some(value) = lookup("STREAMDASH_END_DATE") {
            config.dashboard.default_end_date = Some(parse_var("STREAMDASH_END_DATE", &value)?);
        }

        if let Some(value) = lookup("STREAMDASH_MEASURE") {
            config.dashboard.measure = parse_var("STREAMDASH_MEASURE", &value)?;
        }

        if let Some(value) = lookup("STREAMDASH_TOP_SHOWS") {
            config.dashboard.top_shows_limit = parse_var("STREAMDASH_TOP_SHOWS", &value)?;
        }

        if let Some(value) = lookup("STREAMDASH_OUTPUT_FORMAT") {
            config.output.format = parse_var("STREAMDASH_OUTPUT_FORMAT", &value)?;
        }

        if let Some(value) = lookup("STREAMDASH_DECIMALS") {
            config.output.decimals = parse_var("STREAMDASH_DECIMALS", &value)?;
        }

        // Logging configuration overrides
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Some(value) = lookup("LOG_FORMAT") {
            config.logging.format = parse_var("LOG_FORMAT", &value)?;
        }

        if let Some(value) = lookup("LOG_COLORED") {
            config.logging.colored = parse_var("LOG_COLORED", &value)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OutputFormat;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::io::Write;
    use streamdash_common::test_utils::config_fixtures;
    use streamdash_common::{Granularity, LogFormat, Measure};
    use tempfile::NamedTempFile;

    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_load_full_yaml_config() {
        let file = create_test_config_file(config_fixtures::full_config_yaml());
        let config = ConfigLoader::load_config_with(file.path(), no_env).unwrap();

        assert_eq!(config.data.path, "fixtures/events.json");
        assert_eq!(config.dashboard.default_timeframe, Granularity::Weekly);
        assert_eq!(
            config.dashboard.default_start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(config.dashboard.top_shows_limit, 3);
        assert!(!config.dashboard.charts.watch_by_type);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(!config.logging.colored);
    }

    #[test]
    fn test_load_minimal_config() {
        let file = create_test_config_file(config_fixtures::minimal_config_yaml());
        let config = ConfigLoader::load_config_with(file.path(), no_env).unwrap();

        assert_eq!(config.data.path, "data/streaming_data.json");
        assert_eq!(config.dashboard.default_timeframe, Granularity::Monthly);
        assert_eq!(config.dashboard.measure, Measure::WatchMinutes);
        assert_eq!(config.dashboard.top_shows_limit, 5);
    }

    #[test]
    fn test_invalid_yaml() {
        let file = create_test_config_file("data:\n  path: [unclosed");
        let result = ConfigLoader::load_config_with(file.path(), no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let file = create_test_config_file("logging:\n  level: \"chatty\"\n");
        let result = ConfigLoader::load_config_with(file.path(), no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConfigLoader::load_config_with("/nonexistent/streamdash.yaml", no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_environment_overrides() {
        let file = create_test_config_file(config_fixtures::full_config_yaml());
        let lookup = env_from(&[
            ("STREAMDASH_DATA_PATH", "/srv/events.json"),
            ("STREAMDASH_TIMEFRAME", "quarterly"),
            ("STREAMDASH_TOP_SHOWS", "8"),
            ("STREAMDASH_MEASURE", "show_duration_seconds"),
            ("LOG_LEVEL", "warn"),
            ("LOG_FORMAT", "json"),
        ]);

        let config = ConfigLoader::load_config_with(file.path(), lookup).unwrap();

        assert_eq!(config.data.path, "/srv/events.json");
        assert_eq!(config.dashboard.default_timeframe, Granularity::Quarterly);
        assert_eq!(config.dashboard.top_shows_limit, 8);
        assert_eq!(config.dashboard.measure, Measure::ShowDurationSeconds);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_environment_override() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, env_from(&[("STREAMDASH_TOP_SHOWS", "many")]))
            .unwrap_err();

        match err {
            ConfigError::EnvParseError { var, .. } => assert_eq!(var, "STREAMDASH_TOP_SHOWS"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ConfigLoader::apply_overrides(&mut config, env_from(&[("STREAMDASH_END_DATE", "04/08/2025")]))
            .unwrap_err();
        assert!(err.to_string().contains("STREAMDASH_END_DATE"));
    }

    #[test]
    fn test_override_can_invalidate_config() {
        let file = create_test_config_file(config_fixtures::full_config_yaml());
        let lookup = env_from(&[("STREAMDASH_START_DATE", "2024-12-31")]);

        let result = ConfigLoader::load_config_with(file.path(), lookup);
        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_config_error_converts_to_config_variant() {
        let err: StreamDashError = ConfigError::IoError(std::io::Error::other("boom")).into();
        assert!(matches!(err, StreamDashError::Config { .. }));
        assert!(err.to_string().contains("boom"));
    }
}
