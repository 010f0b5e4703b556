//! Output formatting for events and timelines.
//!
//! This module provides formatters for displaying events:
//! - **Preview**: the short summary shown right after parsing
//! - **Details**: the full view of a single event
//! - **Timeline**: one line per day slot
//! - **JSON**: the machine-readable event record
//!
//! # Example
//!
//! ```rust
//! use eventline_core::format::{format_preview, to_json};
//! use eventline_core::Event;
//!
//! let event = Event::new("2025-03-01-quiz").with_title("Quiz").with_date("2025-03-01");
//! let preview = format_preview(&event);
//! assert!(preview.contains("Title: Quiz"));
//! assert!(to_json(&event).unwrap().contains("\"id\": \"2025-03-01-quiz\""));
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::timeline::{DateRange, DaySlot, RangeFilter};


/// Placeholder shown for an empty title in the preview.
const NO_TITLE: &str = "(none)";

/// Placeholder shown for an undetected date or time in the preview.
const NOT_DETECTED: &str = "(not detected)";

/// The output format for event display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum length for event titles in the timeline (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// Whether days without events are listed in the timeline.
    pub show_empty_days: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_title_length: Some(40),
            show_empty_days: true,
        }
    }
}

/// JSON output for a timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTimeline {
    /// Which range was requested.
    pub range: RangeFilter,
    /// First day shown.
    pub start: String,
    /// Last day shown.
    pub end: String,
    /// Days that have at least one event.
    pub days: Vec<DaySlot>,
    /// Number of events inside the range.
    pub count: usize,
}

impl JsonTimeline {
    /// Builds the JSON view of a timeline, keeping only days with events.
    pub fn new(range: RangeFilter, span: DateRange, slots: &[DaySlot]) -> Self {
        let days: Vec<DaySlot> = slots
            .iter()
            .filter(|slot| !slot.events.is_empty())
            .cloned()
            .collect();
        let count = days.iter().map(|slot| slot.events.len()).sum();
        Self {
            range,
            start: span.start.to_string(),
            end: span.end.to_string(),
            days,
            count,
        }
    }
}

/// Formats the summary shown after parsing an announcement.
pub fn format_preview(event: &Event) -> String {
    let mut lines = vec![
        "📋 Parsed Event".to_string(),
        format!("Title: {}", or_placeholder(&event.title, NO_TITLE)),
        format!("Date: {}", or_placeholder(&event.date, NOT_DETECTED)),
        format!("Time: {}", or_placeholder(&event.time, NOT_DETECTED)),
        format!("Status: {}", event.status),
    ];
    if let Some(ref prize) = event.prize {
        lines.push(format!("Prize: {}", prize));
    }
    lines.join("\n")
}

/// Formats the full view of a single event.
///
/// Empty fields are left out.
pub fn format_details(event: &Event) -> String {
    let mut lines = vec![event.title.clone()];

    let mut meta = Vec::new();
    if !event.date.is_empty() {
        meta.push(format!("📅 {}", event.date));
    }
    if !event.time.is_empty() {
        meta.push(format!("🕐 {}", event.time));
    }
    meta.push(format!("[{}]", event.status.badge()));
    lines.push(meta.join("  "));

    if let Some(ref prize) = event.prize {
        lines.push(format!("🏆 Prize: {}", prize));
    }
    if !event.description.is_empty() {
        lines.push(String::new());
        lines.push(event.description.clone());
    }
    if let Some(ref url) = event.discord_url {
        lines.push(String::new());
        lines.push(format!("View Discord Post → {}", url));
    }
    lines.join("\n")
}

/// Formats timeline day slots, one line per day.
///
/// Each day shows its first event; extra events on the same day are
/// summarized as `+N more`.
pub fn format_timeline(slots: &[DaySlot], options: &FormatOptions) -> Vec<String> {
    let label_width = slots.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);

    slots
        .iter()
        .filter(|slot| options.show_empty_days || !slot.events.is_empty())
        .map(|slot| {
            let label = format!("{:<width$}", slot.label, width = label_width);
            match slot.primary_event() {
                None => format!("{} │", label),
                Some(event) => {
                    let title = match options.max_title_length {
                        Some(max) => ellipsis(&event.title, max),
                        None => Cow::Borrowed(event.title.as_str()),
                    };
                    let mut line =
                        format!("{} │ {} [{}]", label, title, event.status.badge());
                    if event.poster_url.is_some() {
                        line.push_str(" 🖼");
                    }
                    if slot.events.len() > 1 {
                        line.push_str(&format!(" +{} more", slot.events.len() - 1));
                    }
                    line
                }
            }
        })
        .collect()
}

/// Serializes an event as pretty-printed JSON.
pub fn to_json(event: &Event) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(event)
}

/// Truncates a string with ellipsis if it exceeds the given length.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        return Cow::Borrowed(s);
    }

    let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", truncated))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ellipsis_tests {
        use super::*;

        #[test]
        fn short_string_unchanged() {
            assert_eq!(ellipsis("hello", 10), "hello");
        }

        #[test]
        fn exact_length_unchanged() {
            assert_eq!(ellipsis("hello", 5), "hello");
        }

        #[test]
        fn long_string_truncated() {
            assert_eq!(ellipsis("hello world", 8), "hello...");
        }

        #[test]
        fn zero_length() {
            assert_eq!(ellipsis("hello", 0), "");
        }

        #[test]
        fn counts_chars_not_bytes() {
            assert_eq!(ellipsis("ééééé", 5), "ééééé");
        }
    }

    mod preview {
        use super::*;

        #[test]
        fn placeholders_for_missing_fields() {
            let output = format_preview(&Event::new("event-1"));
            assert!(output.contains("Title: (none)"));
            assert!(output.contains("Date: (not detected)"));
            assert!(output.contains("Time: (not detected)"));
            assert!(output.contains("Status: planned"));
            assert!(!output.contains("Prize"));
        }

        #[test]
        fn prize_line_when_present() {
            let event = Event::new("x").with_prize("50c + 10c");
            assert!(format_preview(&event).ends_with("Prize: 50c + 10c"));
        }
    }

    mod details {
        use super::*;

        #[test]
        fn skips_empty_fields() {
            let event = Event::new("x").with_title("Quiz");
            assert_eq!(format_details(&event), "Quiz\n[PLANNED]");
        }
    }
}
