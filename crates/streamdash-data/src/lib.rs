//! # StreamDash Data
//!
//! The viewing event model, the JSON dataset loader, the shared read-only
//! [`EventStore`] and the filter engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod filter;
pub mod loader;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use event::{percentage_watched, Event, EventFields, PercentageCategory};
pub use filter::{is_all_sentinel, DateRange, FilterSelection, Selection};
pub use loader::parse_timestamp;
pub use store::EventStore;
