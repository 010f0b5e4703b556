//! Timeline model: date ranges, day slots and grouping of events by day.
//!
//! This module provides [`RangeFilter`] for choosing which days to show,
//! [`DateRange`] for the resulting inclusive span of days, and
//! [`build_timeline`] which lays events out into [`DaySlot`]s.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Days of padding added around the event span for [`RangeFilter::All`].
const ALL_RANGE_PADDING_DAYS: u64 = 3;

/// Which part of the calendar the timeline shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeFilter {
    /// The current month.
    #[default]
    Month,
    /// The month after the current one.
    Next,
    /// Every dated event, padded by a few days on each side.
    All,
}

impl std::str::FromStr for RangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "next" => Ok(Self::Next),
            "all" => Ok(Self::All),
            other => Err(format!("unknown range: {} (expected month, next or all)", other)),
        }
    }
}

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        assert!(start <= end, "DateRange start must be <= end");
        Self { start, end }
    }

    /// Returns the range covering the whole month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = next_month_start(start).pred_opt().unwrap_or(start);
        Self::new(start, end)
    }

    /// Returns true if `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Enumerates every day of the range in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }
}

/// One day of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    /// The calendar day.
    pub date: NaiveDate,
    /// Short display label (`"5 Jan"`).
    pub label: String,
    /// Events on this day, in collection order.
    pub events: Vec<Event>,
}

impl DaySlot {
    /// Returns the event shown on the day card.
    pub fn primary_event(&self) -> Option<&Event> {
        self.events.first()
    }
}

/// Computes the date range for a filter.
///
/// For [`RangeFilter::All`] the span runs from three days before the
/// earliest dated event to three days after the latest one; with no dated
/// events it falls back to the current month.
pub fn date_range(filter: RangeFilter, events: &[Event], today: NaiveDate) -> DateRange {
    match filter {
        RangeFilter::Month => DateRange::month_of(today),
        RangeFilter::Next => {
            let this_month = DateRange::month_of(today);
            DateRange::month_of(next_month_start(this_month.start))
        }
        RangeFilter::All => {
            let mut dates = events.iter().filter_map(Event::date_naive);
            let Some(first) = dates.next() else {
                return DateRange::month_of(today);
            };
            let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
            padded_span(min, max)
        }
    }
}

/// Pads `min..=max` on both sides, clamping at the ends of the calendar.
fn padded_span(min: NaiveDate, max: NaiveDate) -> DateRange {
    let padding = Days::new(ALL_RANGE_PADDING_DAYS);
    let start = min.checked_sub_days(padding).unwrap_or(NaiveDate::MIN);
    let end = max.checked_add_days(padding).unwrap_or(NaiveDate::MAX);
    DateRange::new(start, end)
}

/// Groups events by their date, keeping collection order within a day.
///
/// Events without a valid date are skipped.
pub fn group_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        if let Some(date) = event.date_naive() {
            grouped.entry(date).or_default().push(event.clone());
        }
    }
    grouped
}

/// Formats a day label such as `"5 Jan"`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Lays events out over the day slots of the filter's range.
pub fn build_timeline(filter: RangeFilter, events: &[Event], today: NaiveDate) -> Vec<DaySlot> {
    let range = date_range(filter, events, today);
    let mut grouped = group_by_date(events);

    range
        .days()
        .into_iter()
        .map(|date| DaySlot {
            date,
            label: day_label(date),
            events: grouped.remove(&date).unwrap_or_default(),
        })
        .collect()
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_on(id: &str, day: &str) -> Event {
        Event::new(id).with_title(id).with_date(day)
    }

    mod range_filter {
        use super::*;

        #[test]
        fn parses_names() {
            assert_eq!("month".parse::<RangeFilter>(), Ok(RangeFilter::Month));
            assert_eq!("NEXT".parse::<RangeFilter>(), Ok(RangeFilter::Next));
            assert_eq!("all".parse::<RangeFilter>(), Ok(RangeFilter::All));
            assert!("week".parse::<RangeFilter>().is_err());
        }
    }

    mod date_range_tests {
        use super::*;

        #[test]
        fn month_covers_current_month() {
            let range = date_range(RangeFilter::Month, &[], date(2024, 2, 14));
            assert_eq!(range, DateRange::new(date(2024, 2, 1), date(2024, 2, 29)));
        }

        #[test]
        fn next_covers_following_month() {
            let range = date_range(RangeFilter::Next, &[], date(2025, 1, 31));
            assert_eq!(range, DateRange::new(date(2025, 2, 1), date(2025, 2, 28)));
        }

        #[test]
        fn next_wraps_the_year() {
            let range = date_range(RangeFilter::Next, &[], date(2025, 12, 10));
            assert_eq!(range, DateRange::new(date(2026, 1, 1), date(2026, 1, 31)));
        }

        #[test]
        fn all_pads_event_span() {
            let events = vec![
                event_on("b", "2025-03-10"),
                event_on("a", "2025-03-02"),
                event_on("undated", ""),
            ];
            let range = date_range(RangeFilter::All, &events, date(2025, 6, 1));
            assert_eq!(range, DateRange::new(date(2025, 2, 27), date(2025, 3, 13)));
        }

        #[test]
        fn padding_clamps_at_calendar_ends() {
            let range = padded_span(NaiveDate::MIN, NaiveDate::MAX);
            assert_eq!(range, DateRange::new(NaiveDate::MIN, NaiveDate::MAX));

            let near_end = NaiveDate::MAX.pred_opt().unwrap();
            let range = padded_span(near_end, near_end);
            assert_eq!(range.end, NaiveDate::MAX);
            assert_eq!(range.start, near_end - Days::new(3));
        }

        #[test]
        fn all_with_far_future_event_does_not_overflow() {
            let events = vec![event_on("capsule", "+262142-12-31")];
            let range = date_range(RangeFilter::All, &events, date(2025, 6, 1));
            assert!(range.contains(date(262142, 12, 31)));
            assert_eq!(range.start, date(262142, 12, 28));
        }

        #[test]
        fn all_without_dated_events_is_current_month() {
            let events = vec![event_on("undated", ""), event_on("bad", "tomorrow")];
            let range = date_range(RangeFilter::All, &events, date(2025, 6, 20));
            assert_eq!(range, DateRange::month_of(date(2025, 6, 20)));
        }

        #[test]
        fn days_are_inclusive() {
            let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
            assert_eq!(
                range.days(),
                vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]
            );
            assert!(range.contains(date(2025, 2, 2)));
            assert!(!range.contains(date(2025, 2, 3)));
        }

        #[test]
        #[should_panic(expected = "start must be <= end")]
        fn invalid_range() {
            DateRange::new(date(2025, 2, 2), date(2025, 2, 1));
        }
    }

    mod grouping {
        use super::*;

        #[test]
        fn keeps_order_within_a_day() {
            let events = vec![
                event_on("first", "2025-03-01"),
                event_on("other", "2025-03-02"),
                event_on("second", "2025-03-01"),
            ];
            let grouped = group_by_date(&events);
            let ids: Vec<&str> = grouped[&date(2025, 3, 1)]
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec!["first", "second"]);
            assert_eq!(grouped.len(), 2);
        }

        #[test]
        fn skips_undated_events() {
            let grouped = group_by_date(&[event_on("x", "")]);
            assert!(grouped.is_empty());
        }
    }

    mod building {
        use super::*;

        #[test]
        fn day_labels() {
            assert_eq!(day_label(date(2025, 1, 5)), "5 Jan");
            assert_eq!(day_label(date(2025, 12, 25)), "25 Dec");
        }

        #[test]
        fn slots_cover_range_and_hold_events() {
            let events = vec![
                event_on("quiz", "2025-03-05"),
                event_on("outside", "2025-04-01"),
            ];
            let slots = build_timeline(RangeFilter::Month, &events, date(2025, 3, 20));
            assert_eq!(slots.len(), 31);
            assert_eq!(slots[0].label, "1 Mar");
            assert_eq!(slots[4].primary_event().map(|e| e.id.as_str()), Some("quiz"));
            assert_eq!(slots.iter().filter(|s| !s.events.is_empty()).count(), 1);
        }
    }
}
