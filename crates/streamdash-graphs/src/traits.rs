//! Chart builder trait definitions for the dashboard's chart types.

use crate::aggregator::aggregate;
use crate::chart::ChartData;
use serde::Serialize;
use streamdash_common::{Dimension, Granularity, Measure};
use streamdash_data::Event;

/// How a chart's series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// A single line.
    Line,
    /// One stacked area per group.
    StackedArea,
}

/// Trait for chart builders that turn filtered events into chart series.
pub trait Chart: Send + Sync {
    /// Gets the identifier of this chart type.
    fn name(&self) -> &'static str;

    /// Gets the display title of this chart type.
    fn title(&self) -> &'static str;

    /// Gets the description of this chart type.
    fn description(&self) -> &'static str;

    /// Gets how the series are drawn.
    fn kind(&self) -> ChartKind;

    /// Gets the breakdown column, if any.
    fn group_by(&self) -> Option<Dimension>;

    /// Aggregates the filtered events into this chart's series.
    fn build(&self, events: &[&Event], timeframe: Granularity, measure: Measure) -> ChartData {
        let rows = aggregate(events, timeframe, measure, self.group_by());
        ChartData::new(self, timeframe, measure, rows)
    }
}
