//! Chart series built from aggregate rows.

use crate::aggregator::AggregateRow;
use crate::timeframe::Period;
use crate::traits::{Chart, ChartKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use streamdash_common::{Granularity, Measure};

/// Name of the only series of an ungrouped chart.
pub const TOTAL_SERIES: &str = "Total";

/// The aggregated data behind one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Chart identifier.
    pub name: String,
    /// Display title.
    pub title: String,
    /// How the series are drawn.
    pub kind: ChartKind,
    /// Timeframe the rows are bucketed by.
    pub timeframe: Granularity,
    /// Summed column.
    pub measure: Measure,
    /// Aggregate rows, ordered by period then group.
    pub rows: Vec<AggregateRow>,
}

/// One named series aligned with [`ChartData::periods`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Group value, or [`TOTAL_SERIES`].
    pub name: String,
    /// Value per period; `None` where the group had no events.
    pub values: Vec<Option<f64>>,
}

impl ChartData {
    /// Wraps the rows produced for `chart`.
    pub fn new<C: Chart + ?Sized>(
        chart: &C,
        timeframe: Granularity,
        measure: Measure,
        rows: Vec<AggregateRow>,
    ) -> Self {
        Self {
            name: chart.name().to_string(),
            title: format!("{} ({})", chart.title(), timeframe),
            kind: chart.kind(),
            timeframe,
            measure,
            rows,
        }
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct group keys across every period.
    pub fn categories(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.group_key.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct periods, in order.
    pub fn periods(&self) -> Vec<Period> {
        let mut periods: Vec<Period> = Vec::new();
        for row in &self.rows {
            if periods.last().map(|p| p.start) != Some(row.period_start) {
                periods.push(Period {
                    start: row.period_start,
                    label: row.period_label.clone(),
                });
            }
        }
        periods
    }

    /// Sum of every row.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// One series per category, aligned with [`ChartData::periods`].
    ///
    /// Absent (period, group) cells are `None`, not zero. An ungrouped chart
    /// has a single [`TOTAL_SERIES`] series.
    pub fn pivot(&self) -> Vec<Series> {
        let periods = self.periods();
        let index: BTreeMap<_, _> = periods
            .iter()
            .enumerate()
            .map(|(i, period)| (period.start, i))
            .collect();

        let mut series: BTreeMap<&str, Vec<Option<f64>>> = BTreeMap::new();
        for row in &self.rows {
            let name = row.group_key.as_deref().unwrap_or(TOTAL_SERIES);
            let values = series
                .entry(name)
                .or_insert_with(|| vec![None; periods.len()]);
            if let Some(&i) = index.get(&row.period_start) {
                values[i] = Some(row.value);
            }
        }

        series
            .into_iter()
            .map(|(name, values)| Series {
                name: name.to_string(),
                values,
            })
            .collect()
    }
}
