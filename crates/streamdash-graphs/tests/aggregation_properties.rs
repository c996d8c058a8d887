//! Property tests for the aggregation engine.
//!
//! Watch times are whole minutes so every sum is exact in `f64`.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use streamdash_common::{Dimension, Granularity, Measure};
use streamdash_data::testing::EventBuilder;
use streamdash_data::Event;
use streamdash_graphs::{aggregate, period_start, top_groups};

const TIMEZONES: [&str; 4] = ["EST", "CST", "PST", ""];
const SHOWS: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
}

fn event_strategy() -> impl Strategy<Value = Event> {
    (0u64..900, 0u32..600, 0usize..TIMEZONES.len(), 0usize..SHOWS.len(), any::<bool>()).prop_map(
        |(offset, minutes, tz, show, timestamped)| {
            let date = base_date() + Days::new(offset);
            let builder = EventBuilder::new()
                .at(date.year(), date.month(), date.day())
                .minutes(f64::from(minutes))
                .timezone(TIMEZONES[tz])
                .show(SHOWS[show]);
            if timestamped {
                builder.build()
            } else {
                builder.without_timestamp().build()
            }
        },
    )
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event_strategy(), 0..60)
}

fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop::sample::select(Granularity::ALL.to_vec())
}

fn timestamped_total(events: &[Event]) -> f64 {
    events
        .iter()
        .filter(|e| e.created_date.is_some())
        .map(|e| e.watch_minutes)
        .sum()
}

proptest! {
    #[test]
    fn sums_are_preserved(events in events_strategy(), granularity in granularity_strategy()) {
        let expected = timestamped_total(&events);

        let ungrouped: f64 = aggregate(&events, granularity, Measure::WatchMinutes, None)
            .iter().map(|r| r.value).sum();
        let grouped: f64 = aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::Timezone))
            .iter().map(|r| r.value).sum();

        prop_assert_eq!(ungrouped, expected);
        prop_assert_eq!(grouped, expected);
    }

    #[test]
    fn each_cell_sums_its_own_events(events in events_strategy(), granularity in granularity_strategy()) {
        let mut expected: BTreeMap<(NaiveDate, String), f64> = BTreeMap::new();
        for event in &events {
            if let Some(ts) = event.created_date {
                let key = if event.timezone.is_empty() { "Unknown" } else { event.timezone.as_str() };
                *expected.entry((period_start(granularity, ts.date()), key.to_string())).or_insert(0.0) += event.watch_minutes;
            }
        }

        let rows = aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::Timezone));
        let actual: BTreeMap<(NaiveDate, String), f64> = rows
            .iter()
            .map(|r| ((r.period_start, r.group_key.clone().unwrap_or_default()), r.value))
            .collect();

        // Same keys means no zero-filled cells and no missing ones
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn rows_are_ordered(events in events_strategy(), granularity in granularity_strategy()) {
        let rows = aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::ShowName));
        for pair in rows.windows(2) {
            let a = (pair[0].period_start, pair[0].group_key.as_deref());
            let b = (pair[1].period_start, pair[1].group_key.as_deref());
            prop_assert!(a < b, "{:?} is not before {:?}", a, b);
        }
    }

    #[test]
    fn grouped_and_ungrouped_agree_on_periods(events in events_strategy(), granularity in granularity_strategy()) {
        let ungrouped = aggregate(&events, granularity, Measure::WatchMinutes, None);
        let grouped = aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::ShowName));

        let mut per_period: BTreeMap<(NaiveDate, String), f64> = BTreeMap::new();
        for row in &grouped {
            *per_period.entry((row.period_start, row.period_label.clone())).or_insert(0.0) += row.value;
        }
        let totals: BTreeMap<(NaiveDate, String), f64> = ungrouped
            .iter()
            .map(|r| ((r.period_start, r.period_label.clone()), r.value))
            .collect();

        prop_assert_eq!(per_period, totals);
    }

    #[test]
    fn aggregation_is_idempotent(events in events_strategy(), granularity in granularity_strategy()) {
        prop_assert_eq!(
            aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::Timezone)),
            aggregate(&events, granularity, Measure::WatchMinutes, Some(Dimension::Timezone))
        );
    }

    #[test]
    fn weekly_buckets_start_on_sunday(events in events_strategy()) {
        for row in aggregate(&events, Granularity::Weekly, Measure::WatchMinutes, None) {
            prop_assert_eq!(row.period_start.weekday(), Weekday::Sun);
            prop_assert!(!row.period_label.ends_with("-00"), "label {}", row.period_label);
        }
    }

    #[test]
    fn top_groups_are_sorted_and_bounded(events in events_strategy(), n in 0usize..7) {
        let top = top_groups(&events, Dimension::ShowName, Measure::WatchMinutes, n);
        prop_assert!(top.len() <= n);

        let distinct: BTreeSet<&str> = events
            .iter()
            .filter(|e| e.created_date.is_some())
            .map(|e| e.show_name.as_str())
            .collect();
        prop_assert_eq!(top.len(), n.min(distinct.len()));

        for pair in top.windows(2) {
            prop_assert!(
                pair[0].total > pair[1].total
                    || (pair[0].total == pair[1].total && pair[0].key < pair[1].key)
            );
        }
    }
}
