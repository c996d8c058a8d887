//! Total watch duration chart implementation.

use crate::traits::{Chart, ChartKind};
use streamdash_common::Dimension;

/// Total watch duration over time, as a single line.
pub struct TotalWatchDurationChart;

impl Chart for TotalWatchDurationChart {
    fn name(&self) -> &'static str {
        "total_watch_duration"
    }

    fn title(&self) -> &'static str {
        "Total Watch Duration"
    }

    fn description(&self) -> &'static str {
        "Total watch duration per period"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn group_by(&self) -> Option<Dimension> {
        None
    }
}
