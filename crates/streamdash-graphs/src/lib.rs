//! # StreamDash Graphs
//!
//! The time-bucketing and grouped aggregation engine, and the chart series
//! the dashboard is made of.
//!
//! [`aggregate`] turns filtered events into period-indexed rows, [`Chart`]
//! implementations pick the breakdown for each dashboard tab and
//! [`Dashboard::build`] runs one filter pass through every enabled chart.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod chart;
pub mod dashboard;
pub mod timeframe;
pub mod traits;

// Chart implementations
pub mod total_watch_duration;
pub mod watch_by_show;
pub mod watch_by_timezone;
pub mod watch_by_type;

pub use aggregator::*;
pub use chart::*;
pub use dashboard::*;
pub use timeframe::*;
pub use total_watch_duration::*;
pub use traits::*;
pub use watch_by_show::*;
pub use watch_by_timezone::*;
pub use watch_by_type::*;
