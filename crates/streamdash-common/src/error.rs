//! Error types shared by every StreamDash crate

use thiserror::Error;

/// Result type alias for StreamDash operations
pub type Result<T> = std::result::Result<T, StreamDashError>;

/// Boxed underlying cause carried by the message-style variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for StreamDash operations
///
/// Bad rows in a dataset are not errors; the loader and the aggregation skip
/// them. An empty aggregation is not an error either.
#[derive(Error, Debug)]
pub enum StreamDashError {
    /// Configuration file, environment override or startup wiring problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O failure outside of dataset loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The event dataset could not be opened or decoded as a whole
    #[error("Data error: {message}")]
    Data {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// A caller passed an argument the operation cannot accept, such as an
    /// unknown timeframe or column name. Never retried.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What went wrong
        message: String,
        /// Name of the offending argument
        argument: Option<String>,
    },

    /// A user selection or configuration value is out of range
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
        /// Name of the offending field
        field: Option<String>,
    },

    /// Anything else, optionally wrapping a cause
    #[error("{message}")]
    Generic {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },
}

fn boxed(source: impl std::error::Error + Send + Sync + 'static) -> Option<BoxedSource> {
    Some(Box::new(source))
}

impl StreamDashError {
    /// Generic error with a message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic { message: msg.into(), source: None }
    }

    /// Generic error wrapping `source`
    pub fn with_source(msg: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Generic { message: msg.into(), source: boxed(source) }
    }

    /// Configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config { message: msg.into(), source: None }
    }

    /// Configuration error wrapping `source`
    pub fn config_with_source(msg: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Config { message: msg.into(), source: boxed(source) }
    }

    /// Dataset error wrapping `source`
    pub fn data_with_source(msg: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Data { message: msg.into(), source: boxed(source) }
    }

    /// Invalid argument naming the offending parameter
    pub fn invalid_argument(msg: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::InvalidArgument { message: msg.into(), argument: Some(argument.into()) }
    }

    /// Validation error not tied to a field
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation { message: msg.into(), field: None }
    }

    /// Validation error naming the offending field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation { message: msg.into(), field: Some(field.into()) }
    }

    /// Whether this error is a caller contract violation rather than a data
    /// or environment problem
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
