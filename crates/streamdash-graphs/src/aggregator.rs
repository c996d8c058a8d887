//! Time-bucketed, optionally grouped sum aggregation over viewing events.

use crate::timeframe::{period_label, period_start};
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use streamdash_common::{Dimension, Granularity, Measure, Result};
use streamdash_data::Event;
use tracing::{debug, instrument, warn};

/// Group key used for rows with no value in the grouping column.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// One aggregated (period, group) cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Display label of the period.
    pub period_label: String,
    /// Group value, present only for grouped aggregations.
    pub group_key: Option<String>,
    /// Sum of the measure over the cell.
    pub value: f64,
}

/// Total of one group over every period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    /// Group value.
    pub key: String,
    /// Sum of the measure.
    pub total: f64,
}

/// The grouping key of an event.
pub fn group_key(event: &Event, dimension: Dimension) -> &str {
    event.dimension(dimension).unwrap_or(UNKNOWN_GROUP)
}

/// Sums `measure` per period, or per (period, group) when `group_by` is set.
///
/// Only non-empty cells are emitted. Rows are ordered by period start and,
/// within a period, by group key. Events without a timestamp or without a
/// value for `measure` are skipped.
#[instrument(skip(events), fields(events = events.len()))]
pub fn aggregate<E: Borrow<Event>>(
    events: &[E],
    timeframe: Granularity,
    measure: Measure,
    group_by: Option<Dimension>,
) -> Vec<AggregateRow> {
    let mut cells: BTreeMap<(NaiveDate, Option<&str>), f64> = BTreeMap::new();
    let mut missing_timestamp = 0_usize;
    let mut missing_value = 0_usize;

    for event in events {
        let event: &Event = event.borrow();
        let Some(timestamp) = event.created_date else {
            missing_timestamp += 1;
            continue;
        };
        let Some(value) = event.measure(measure) else {
            missing_value += 1;
            continue;
        };

        let start = period_start(timeframe, timestamp.date());
        let key = group_by.map(|dimension| group_key(event, dimension));
        *cells.entry((start, key)).or_insert(0.0) += value;
    }

    if missing_timestamp > 0 {
        warn!(missing_timestamp, "Skipped events without a timestamp");
    }
    if missing_value > 0 {
        debug!(missing_value, %measure, "Skipped events without a value");
    }

    let rows: Vec<AggregateRow> = cells
        .into_iter()
        .map(|((start, key), value)| AggregateRow {
            period_start: start,
            period_label: period_label(timeframe, start),
            group_key: key.map(str::to_string),
            value,
        })
        .collect();

    debug!(rows = rows.len(), "Aggregated events");
    rows
}

/// Name-based entry point: parses the arguments, then aggregates.
///
/// Unknown names fail with an `InvalidArgument` error naming the argument.
pub fn aggregate_by_name<E: Borrow<Event>>(
    events: &[E],
    timeframe: &str,
    value_column: &str,
    group_by: Option<&str>,
) -> Result<Vec<AggregateRow>> {
    let timeframe: Granularity = timeframe.parse()?;
    let measure: Measure = value_column.parse()?;
    let group_by = group_by.map(str::parse::<Dimension>).transpose()?;

    Ok(aggregate(events, timeframe, measure, group_by))
}

/// The `n` groups with the largest totals, largest first.
///
/// Counts exactly the events [`aggregate`] would sum. Equal totals are
/// ordered by group key.
#[instrument(skip(events), fields(events = events.len()))]
pub fn top_groups<E: Borrow<Event>>(
    events: &[E],
    dimension: Dimension,
    measure: Measure,
    n: usize,
) -> Vec<GroupTotal> {
    if n == 0 {
        return Vec::new();
    }

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for event in events {
        let event: &Event = event.borrow();
        if event.created_date.is_none() {
            continue;
        }
        if let Some(value) = event.measure(measure) {
            *totals.entry(group_key(event, dimension)).or_insert(0.0) += value;
        }
    }

    let mut ranked: Vec<GroupTotal> = totals
        .into_iter()
        .map(|(key, total)| GroupTotal {
            key: key.to_string(),
            total,
        })
        .collect();
    ranked.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(n);

    debug!(groups = ranked.len(), "Ranked groups");
    ranked
}
