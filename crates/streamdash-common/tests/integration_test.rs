//! Integration tests for streamdash-common crate.

use std::error::Error;
use streamdash_common::{
    ensure, format_value, init_logging, truncate_string, LogFormat, LoggingConfig, Result,
    StreamDashError,
};

#[test]
fn test_invalid_argument_is_distinguishable() {
    let error = StreamDashError::invalid_argument("unknown column 'watch_hours'", "value_column");
    assert!(error.is_invalid_argument());
    assert!(error.to_string().contains("watch_hours"));
}

#[test]
fn test_ensure_macro_from_outside_crate() {
    fn positive(value: usize) -> Result<usize> {
        ensure!(value > 0, StreamDashError::validation_field("must be positive", "top_shows"));
        Ok(value)
    }

    assert_eq!(positive(5).unwrap(), 5);
    assert!(matches!(positive(0), Err(StreamDashError::Validation { .. })));
}

#[test]
fn test_truncate_and_format_helpers() {
    assert_eq!(truncate_string("The Long Night of Streaming", 10), "The Lon...");
    assert_eq!(format_value(1234.5678, 1), "1234.6");
}

#[test]
fn test_logging_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("streamdash.log");

    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        file_path: Some(path.to_string_lossy().into_owned()),
        ..LoggingConfig::default()
    };

    // Only one global subscriber can exist per test binary
    init_logging(config).unwrap();
    tracing::info!(rows = 3, "integration log line");
    assert!(path.parent().unwrap().exists());

    let second = init_logging(LoggingConfig::default()).unwrap_err();
    assert!(second.to_string().contains("Configuration error"));
    assert!(second.source().is_some());
}
