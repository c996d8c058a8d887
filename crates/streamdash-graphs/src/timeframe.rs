//! Period bucketing and labels.
//!
//! Every aggregation path assigns events to periods through [`period_start`],
//! so grouped and ungrouped results always agree on bucket boundaries.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use streamdash_common::Granularity;

/// A period bucket: its first day and display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Period {
    /// First day of the bucket.
    pub start: NaiveDate,
    /// Label such as `2024-03`, `2024-Q1` or `2024-09`.
    pub label: String,
}

impl Period {
    /// The bucket of `granularity` containing `timestamp`.
    pub fn containing(granularity: Granularity, timestamp: NaiveDateTime) -> Self {
        let start = period_start(granularity, timestamp.date());
        Self {
            start,
            label: period_label(granularity, start),
        }
    }
}

/// First day of the bucket holding `date`.
///
/// Weeks start on Sunday, quarters on January, April, July and October.
pub fn period_start(granularity: Granularity, date: NaiveDate) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => {
            date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
        }
        Granularity::Monthly => month_start(date),
        Granularity::Quarterly => month_start(date) - Months::new(date.month0() % 3),
        Granularity::Yearly => date - Days::new(u64::from(date.ordinal0())),
    }
}

/// Display label of the bucket starting on `start`.
///
/// Weekly labels are `%Y-%U` of the bucket's Sunday. A Sunday always falls in
/// week 01 or later, so a week spanning New Year carries the previous year's
/// label and week `00` never appears.
pub fn period_label(granularity: Granularity, start: NaiveDate) -> String {
    match granularity {
        Granularity::Daily => start.format("%Y-%m-%d").to_string(),
        Granularity::Weekly => start.format("%Y-%U").to_string(),
        Granularity::Monthly => start.format("%Y-%m").to_string(),
        Granularity::Quarterly => format!("{}-Q{}", start.year(), start.month0() / 3 + 1),
        Granularity::Yearly => start.format("%Y").to_string(),
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}
