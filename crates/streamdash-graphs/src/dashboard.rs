//! Dashboard composition: one filter pass feeding every enabled chart.

use crate::chart::ChartData;
use crate::total_watch_duration::TotalWatchDurationChart;
use crate::traits::Chart;
use crate::watch_by_show::WatchByShowChart;
use crate::watch_by_timezone::WatchByTimezoneChart;
use crate::watch_by_type::WatchByTypeChart;
use chrono::NaiveDate;
use serde::Serialize;
use streamdash_common::{Granularity, Measure, Result};
use streamdash_config::{DashboardConfig, EnabledChartsConfig};
use streamdash_data::{DateRange, Event, EventStore, FilterSelection, PercentageCategory, Selection};
use tracing::{info, instrument};

/// Everything a dashboard pass depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRequest {
    /// First day to include; open-ended when `None`.
    pub start_date: Option<NaiveDate>,
    /// Last day to include; open-ended when `None`.
    pub end_date: Option<NaiveDate>,
    /// Viewer state.
    pub state: Selection,
    /// Viewer timezone.
    pub timezone: Selection,
    /// Percentage-watched bucket.
    pub percentage: Selection<PercentageCategory>,
    /// Show genre.
    pub genre: Selection,
    /// Show rating.
    pub rating: Selection,
    /// Period width shared by every chart.
    pub timeframe: Granularity,
    /// Summed column.
    pub measure: Measure,
    /// Number of shows in the "by show" chart.
    pub top_shows: usize,
    /// Charts to compute.
    pub charts: EnabledChartsConfig,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl DashboardRequest {
    /// A request using the configured defaults and no categorical filters.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            start_date: config.default_start_date,
            end_date: config.default_end_date,
            state: Selection::All,
            timezone: Selection::All,
            percentage: Selection::All,
            genre: Selection::All,
            rating: Selection::All,
            timeframe: config.default_timeframe,
            measure: config.measure,
            top_shows: config.top_shows_limit,
            charts: config.charts,
        }
    }

    /// The filter selection of this request.
    ///
    /// Fails with a validation error when the start date is after the end date.
    pub fn filters(&self) -> Result<FilterSelection> {
        let date_range = match (self.start_date, self.end_date) {
            (None, None) => None,
            (start, end) => Some(DateRange::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )?),
        };

        Ok(FilterSelection {
            date_range,
            state: self.state.clone(),
            timezone: self.timezone.clone(),
            percentage: self.percentage.clone(),
            genre: self.genre.clone(),
            rating: self.rating.clone(),
        })
    }
}

/// The result of one dashboard pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Period width of every chart.
    pub timeframe: Granularity,
    /// Summed column.
    pub measure: Measure,
    /// Number of events that passed the filters.
    pub matched_events: usize,
    /// Charts in dashboard order.
    pub charts: Vec<ChartData>,
}

impl DashboardView {
    /// Whether no chart has anything to draw.
    pub fn is_empty(&self) -> bool {
        self.charts.iter().all(ChartData::is_empty)
    }

    /// Looks up a chart by identifier.
    pub fn chart(&self, name: &str) -> Option<&ChartData> {
        self.charts.iter().find(|chart| chart.name == name)
    }
}

/// Composes the dashboard's charts.
pub struct Dashboard;

impl Dashboard {
    /// The enabled charts, in tab order.
    pub fn charts(request: &DashboardRequest) -> Vec<Box<dyn Chart>> {
        let enabled = request.charts;
        let mut charts: Vec<Box<dyn Chart>> = Vec::new();

        if enabled.total_watch_duration {
            charts.push(Box::new(TotalWatchDurationChart));
        }
        if enabled.watch_by_timezone {
            charts.push(Box::new(WatchByTimezoneChart));
        }
        if enabled.watch_by_type {
            charts.push(Box::new(WatchByTypeChart));
        }
        if enabled.watch_by_show {
            charts.push(Box::new(WatchByShowChart::new(request.top_shows)));
        }

        charts
    }

    /// Filters the store once and builds every enabled chart.
    ///
    /// A pure function of the store and the request.
    #[instrument(skip(store, request), fields(timeframe = %request.timeframe, measure = %request.measure))]
    pub fn build(store: &EventStore, request: &DashboardRequest) -> Result<DashboardView> {
        let filters = request.filters()?;
        let selected: Vec<&Event> = filters.apply(store.events());

        let charts: Vec<ChartData> = Self::charts(request)
            .iter()
            .map(|chart| chart.build(&selected, request.timeframe, request.measure))
            .collect();

        info!(
            matched = selected.len(),
            charts = charts.len(),
            "Built dashboard"
        );

        Ok(DashboardView {
            timeframe: request.timeframe,
            measure: request.measure,
            matched_events: selected.len(),
            charts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamdash_common::test_utils::mock_date;
    use streamdash_common::StreamDashError;
    use streamdash_data::testing::EventBuilder;

    fn store() -> EventStore {
        EventStore::from_events(vec![
            EventBuilder::new().at(2024, 3, 5).minutes(10.0).timezone("EST").show_type("Movie").build(),
            EventBuilder::new().at(2024, 3, 17).minutes(20.0).timezone("PST").show_type("Series").build(),
            EventBuilder::new().at(2024, 3, 31).minutes(5.0).timezone("EST").show_type("Movie").build(),
            EventBuilder::new().at(2024, 4, 2).minutes(7.0).timezone("PST").show_type("Movie").build(),
        ])
    }

    fn march_request() -> DashboardRequest {
        DashboardRequest {
            start_date: Some(mock_date(2024, 3, 1)),
            end_date: Some(mock_date(2024, 3, 31)),
            ..DashboardRequest::default()
        }
    }

    #[test]
    fn test_default_request() {
        let request = DashboardRequest::default();
        assert_eq!(request.timeframe, Granularity::Monthly);
        assert_eq!(request.top_shows, 5);
        assert_eq!(Dashboard::charts(&request).len(), 4);
    }

    #[test]
    fn test_build_all_charts() {
        let view = Dashboard::build(&store(), &march_request()).unwrap();

        assert_eq!(view.matched_events, 3);
        let names: Vec<&str> = view.charts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["total_watch_duration", "watch_by_timezone", "watch_by_type", "watch_by_show"]
        );

        let total = view.chart("total_watch_duration").unwrap();
        assert_eq!(total.rows.len(), 1);
        assert_eq!(total.rows[0].value, 35.0);

        let by_type = view.chart("watch_by_type").unwrap();
        assert_eq!(by_type.categories(), vec!["Movie", "Series"]);
    }

    #[test]
    fn test_disabled_charts_are_skipped() {
        let mut request = march_request();
        request.charts.watch_by_type = false;
        request.charts.watch_by_show = false;

        let view = Dashboard::build(&store(), &request).unwrap();
        assert_eq!(view.charts.len(), 2);
        assert!(view.chart("watch_by_type").is_none());
    }

    #[test]
    fn test_no_matches_is_empty_view() {
        let request = DashboardRequest {
            timezone: Selection::from_text("MST"),
            ..march_request()
        };

        let view = Dashboard::build(&store(), &request).unwrap();
        assert_eq!(view.matched_events, 0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_inverted_range_is_validation_error() {
        let request = DashboardRequest {
            start_date: Some(mock_date(2024, 4, 1)),
            end_date: Some(mock_date(2024, 3, 1)),
            ..DashboardRequest::default()
        };

        let err = Dashboard::build(&store(), &request).unwrap_err();
        assert!(matches!(err, StreamDashError::Validation { .. }));
    }

    #[test]
    fn test_open_ended_range() {
        let request = DashboardRequest {
            start_date: Some(mock_date(2024, 3, 20)),
            end_date: None,
            ..DashboardRequest::default()
        };

        let view = Dashboard::build(&store(), &request).unwrap();
        assert_eq!(view.matched_events, 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let store = store();
        let request = march_request();
        assert_eq!(
            Dashboard::build(&store, &request).unwrap(),
            Dashboard::build(&store, &request).unwrap()
        );
    }
}
