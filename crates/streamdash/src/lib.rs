//! # StreamDash
//!
//! Command-line front end of the streaming viewership dashboard.
//!
//! The binary loads the configuration and the event dataset once, keeps the
//! user's selections in a [`Session`] and renders every chart of the
//! resulting view as text tables or JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod render;
pub mod session;

pub use app::*;
pub use cli::*;
pub use error::*;
pub use render::*;
pub use session::*;
