//! Watch duration by timezone chart implementation.

use crate::traits::{Chart, ChartKind};
use streamdash_common::Dimension;

/// Watch duration per period, stacked by viewer timezone.
pub struct WatchByTimezoneChart;

impl Chart for WatchByTimezoneChart {
    fn name(&self) -> &'static str {
        "watch_by_timezone"
    }

    fn title(&self) -> &'static str {
        "Watch Duration by Timezone"
    }

    fn description(&self) -> &'static str {
        "Watch duration per period broken down by viewer timezone"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::StackedArea
    }

    fn group_by(&self) -> Option<Dimension> {
        Some(Dimension::Timezone)
    }
}
