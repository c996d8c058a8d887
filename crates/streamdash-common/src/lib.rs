//! # StreamDash Common
//!
//! Shared error types, vocabulary types, logging setup and utilities for StreamDash.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the StreamDash workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod macros;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, StreamDashError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::{Dimension, Granularity, Measure};
pub use utils::*;
