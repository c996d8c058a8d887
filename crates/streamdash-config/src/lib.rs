//! # StreamDash Config
//!
//! Validated configuration for StreamDash.
//!
//! Configuration is read from YAML, overridden from `STREAMDASH_*` and
//! `LOG_*` environment variables and checked with `validator` before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
