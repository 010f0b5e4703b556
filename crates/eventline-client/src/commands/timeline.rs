//! `eventline timeline`: the day-by-day view of stored events.

use chrono::{NaiveDate, Utc};
use eventline_core::{
    Event, FormatOptions, JsonTimeline, OutputFormat, RangeFilter, build_timeline, date_range,
    format_timeline,
};

use crate::error::ClientResult;
use crate::store::EventStore;

/// Prints the timeline for `range` using today's UTC date.
pub fn run(
    store: &EventStore,
    range: RangeFilter,
    options: &FormatOptions,
    format: OutputFormat,
) -> ClientResult<()> {
    let today = Utc::now().date_naive();
    let output = render(store.events(), range, today, options, format)?;
    println!("{}", output);
    Ok(())
}

/// Renders the timeline as text or JSON.
pub fn render(
    events: &[Event],
    range: RangeFilter,
    today: NaiveDate,
    options: &FormatOptions,
    format: OutputFormat,
) -> ClientResult<String> {
    let span = date_range(range, events, today);
    let slots = build_timeline(range, events, today);

    match format {
        OutputFormat::Json => {
            let json = JsonTimeline::new(range, span, &slots);
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Tty => {
            let mut lines = vec![format!("{} → {}", span.start, span.end)];
            lines.extend(format_timeline(&slots, options));
            if slots.iter().all(|slot| slot.events.is_empty()) {
                lines.push("No events in this range.".to_string());
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_header_and_days() {
        let events = vec![Event::new("e1").with_title("Quiz").with_date("2025-02-03")];
        let options = FormatOptions {
            show_empty_days: false,
            ..FormatOptions::default()
        };
        let output =
            render(&events, RangeFilter::Month, date(2025, 2, 10), &options, OutputFormat::Tty)
                .unwrap();
        assert_eq!(output, "2025-02-01 → 2025-02-28\n3 Feb  │ Quiz [PLANNED]");
    }

    #[test]
    fn reports_empty_range() {
        let output = render(
            &[],
            RangeFilter::Next,
            date(2025, 2, 10),
            &FormatOptions::default(),
            OutputFormat::Tty,
        )
        .unwrap();
        assert!(output.starts_with("2025-03-01 → 2025-03-31"));
        assert!(output.ends_with("No events in this range."));
    }

    #[test]
    fn renders_json() {
        let events = vec![Event::new("e1").with_title("Quiz").with_date("2025-02-03")];
        let output = render(
            &events,
            RangeFilter::Month,
            date(2025, 2, 10),
            &FormatOptions::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["range"], "month");
        assert_eq!(value["count"], 1);
        assert_eq!(value["days"][0]["label"], "3 Feb");
    }
}
