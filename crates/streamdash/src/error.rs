//! Application-wide error types using thiserror.

use streamdash_common::StreamDashError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error raised by the configuration, data or aggregation layers.
    #[error(transparent)]
    Core(#[from] StreamDashError),

    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the JSON output failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
