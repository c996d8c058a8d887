//! Watch duration by show type chart implementation.

use crate::traits::{Chart, ChartKind};
use streamdash_common::Dimension;

/// Watch duration per period, stacked by show type.
pub struct WatchByTypeChart;

impl Chart for WatchByTypeChart {
    fn name(&self) -> &'static str {
        "watch_by_type"
    }

    fn title(&self) -> &'static str {
        "Watch Duration by Type"
    }

    fn description(&self) -> &'static str {
        "Watch duration per period broken down by show type"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::StackedArea
    }

    fn group_by(&self) -> Option<Dimension> {
        Some(Dimension::ShowType)
    }
}
