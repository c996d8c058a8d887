//! Watch duration by show chart implementation.

use crate::aggregator::{aggregate, group_key, top_groups};
use crate::chart::ChartData;
use crate::traits::{Chart, ChartKind};
use std::collections::HashSet;
use streamdash_common::{Dimension, Granularity, Measure};
use streamdash_config::DEFAULT_TOP_SHOWS_LIMIT;
use streamdash_data::Event;
use tracing::debug;

/// Watch duration per period of the most watched shows.
///
/// Shows are ranked by their total over the whole filtered range, not per
/// period, so the same shows appear in every period.
pub struct WatchByShowChart {
    limit: usize,
}

impl WatchByShowChart {
    /// Keeps the `limit` most watched shows.
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Number of shows kept.
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for WatchByShowChart {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_SHOWS_LIMIT)
    }
}

impl Chart for WatchByShowChart {
    fn name(&self) -> &'static str {
        "watch_by_show"
    }

    fn title(&self) -> &'static str {
        "Watch Duration by Show"
    }

    fn description(&self) -> &'static str {
        "Watch duration per period of the most watched shows"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::StackedArea
    }

    fn group_by(&self) -> Option<Dimension> {
        Some(Dimension::ShowName)
    }

    fn build(&self, events: &[&Event], timeframe: Granularity, measure: Measure) -> ChartData {
        let top: HashSet<String> = top_groups(events, Dimension::ShowName, measure, self.limit)
            .into_iter()
            .map(|group| group.key)
            .collect();

        let kept: Vec<&Event> = events
            .iter()
            .copied()
            .filter(|event| top.contains(group_key(event, Dimension::ShowName)))
            .collect();
        debug!(shows = top.len(), events = kept.len(), "Restricted to top shows");

        let rows = aggregate(&kept, timeframe, measure, self.group_by());
        ChartData::new(self, timeframe, measure, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamdash_data::testing::EventBuilder;

    #[test]
    fn test_keeps_only_top_shows() {
        let events = vec![
            EventBuilder::new().at(2024, 3, 1).show("Alpha").minutes(40.0).build(),
            EventBuilder::new().at(2024, 3, 2).show("Beta").minutes(30.0).build(),
            EventBuilder::new().at(2024, 4, 2).show("Beta").minutes(30.0).build(),
            EventBuilder::new().at(2024, 4, 3).show("Gamma").minutes(10.0).build(),
        ];
        let borrowed: Vec<&Event> = events.iter().collect();

        let data = WatchByShowChart::new(2).build(&borrowed, Granularity::Monthly, Measure::WatchMinutes);

        assert_eq!(data.categories(), vec!["Alpha", "Beta"]);
        assert_eq!(data.rows.len(), 3);
        assert_eq!(data.total(), 100.0);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(WatchByShowChart::default().limit(), 5);
    }
}
