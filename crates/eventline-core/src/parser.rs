//! Announcement parsing.
//!
//! Turns a pasted chat announcement into an [`Event`]. Each field comes from
//! an independent extractor over the segmented lines:
//! - [`extract_title`]: the first line
//! - [`extract_date_time`]: the `Date & Time:` line and its timestamp token
//! - [`extract_prize`]: coin amounts and labeled prize lines
//! - [`extract_description`]: everything after the date line
//!
//! Parsing never fails. Missing information shows up as empty fields and is
//! rejected by the caller through [`Event::validate`].
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use eventline_core::parser::parse_announcement_at;
//! use eventline_core::ExtractionOptions;
//!
//! let raw = "**Game Night**\nDate & Time: <t:1700000000:F>\nJoin us!\nPrizes: 100c";
//! let now = Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap();
//! let event = parse_announcement_at(raw, &ExtractionOptions::default(), now);
//!
//! assert_eq!(event.title, "Game Night");
//! assert_eq!(event.date, "2023-11-14");
//! assert_eq!(event.time, "22:13");
//! assert_eq!(event.prize.as_deref(), Some("100c"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use regex::Regex;
use tracing::{debug, trace};

use crate::event::{DATE_FORMAT, Event, EventStatus, ExtractionOptions, non_blank};
use crate::normalize::{normalize, segment};

/// Maximum number of characters kept from the title slug in event ids.
pub const MAX_SLUG_LENGTH: usize = 40;

/// Separator between distinct prize candidates.
const PRIZE_SEPARATOR: &str = " + ";

/// Regex for the date label at the start of a line.
static DATE_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^date (?:&|and) time:").expect("Invalid date label regex"));

/// Regex for platform timestamp tokens (`<t:1700000000:F>`).
static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t:([0-9]+):[FfDdTtRr]>").expect("Invalid timestamp regex"));

/// Regex for coin amounts (`50c`), ending at a non-word character or end of text.
static COIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[cC]\b").expect("Invalid coin regex"));

/// Regex for lines that talk about a prize at all.
static PRIZE_HINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prize|reward|award winner").expect("Invalid prize hint regex")
});

/// Regex for a `Prize:` / `Prizes:` label at the start of a line.
static PRIZE_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^prizes?:").expect("Invalid prize label regex"));

/// Regex for a line that is only the word `Prize` / `Prizes`.
static PRIZE_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^prizes?$").expect("Invalid prize heading regex"));

/// Regex for the `will receive` phrase.
static WILL_RECEIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)will receive").expect("Invalid will-receive regex"));

/// Regex for characters that are dropped from slugs.
static SLUG_STRIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("Invalid slug strip regex"));

/// Regex for whitespace runs collapsed to a hyphen in slugs.
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Date and time fields found in an announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeFields {
    /// `YYYY-MM-DD`, or empty.
    pub date: String,
    /// `HH:MM`, raw label text, or empty.
    pub time: String,
    /// Index of the first line belonging to the description.
    pub next_field_index: usize,
}

/// The extracted fields an [`Event`] is assembled from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub prize: String,
}

/// Parses an announcement using the current wall clock.
///
/// See [`parse_announcement_at`].
pub fn parse_announcement(raw: &str, options: &ExtractionOptions) -> Event {
    parse_announcement_at(raw, options, Utc::now())
}

/// Parses an announcement at a specific time.
///
/// `now` is used for the fallback id of empty input and for the id prefix
/// when no date was detected.
pub fn parse_announcement_at(raw: &str, options: &ExtractionOptions, now: DateTime<Utc>) -> Event {
    let lines = segment(raw);
    if lines.is_empty() {
        debug!("announcement has no lines, using fallback id");
        return Event::new(fallback_id(now));
    }

    let title = extract_title(&lines);
    let date_time = extract_date_time(&lines, options.date_override);
    let description = extract_description(&lines, date_time.next_field_index);
    let prize = extract_prize(&lines);

    let fields = ExtractedFields {
        title,
        date: date_time.date,
        time: date_time.time,
        description,
        prize,
    };
    let event = assemble(fields, options, now);
    debug!(id = %event.id, lines = lines.len(), "parsed announcement");
    event
}

/// Returns the normalized first line, or an empty string.
pub fn extract_title(lines: &[&str]) -> String {
    lines.first().map(|line| normalize(line)).unwrap_or_default()
}

/// Finds the date label line and extracts date and time from it.
///
/// `date_override` takes precedence over any date found in the text, while
/// the time is still taken from the announcement.
pub fn extract_date_time(
    lines: &[&str],
    date_override: Option<NaiveDate>,
) -> DateTimeFields {
    let mut fields = DateTimeFields {
        next_field_index: 1,
        ..Default::default()
    };

    if let Some((index, line)) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| DATE_LABEL_REGEX.is_match(line))
    {
        fields.next_field_index = index + 1;

        match parse_timestamp_token(line) {
            Some(dt) => {
                trace!(line = index, timestamp = %dt, "found timestamp token");
                fields.date = dt.format(DATE_FORMAT).to_string();
                fields.time = format!("{:02}:{:02}", dt.hour(), dt.minute());
            }
            None => {
                if let Some((_, rest)) = line.split_once(':') {
                    fields.time = rest.trim().to_string();
                }
            }
        }
    }

    if let Some(date) = date_override {
        fields.date = date.format(DATE_FORMAT).to_string();
    }

    fields
}

/// Reads the first platform timestamp token in a line as a UTC datetime.
///
/// Tokens outside years 0 to 9999 are ignored, so dates always render as
/// `YYYY-MM-DD`.
fn parse_timestamp_token(line: &str) -> Option<DateTime<Utc>> {
    let captures = TIMESTAMP_REGEX.captures(line)?;
    let seconds: i64 = captures[1].parse().ok()?;
    DateTime::from_timestamp(seconds, 0).filter(|dt| (0..=9999).contains(&dt.year()))
}

/// Collects prize candidates from every line and joins the distinct ones.
///
/// Coin amounts (`50c`) and labeled prize lines are independent signals;
/// a single line may contribute to both. Candidates keep first-seen order.
pub fn extract_prize(lines: &[&str]) -> String {
    let mut seen = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !candidate.is_empty() && seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    };

    for (index, raw_line) in lines.iter().enumerate() {
        for coin in COIN_REGEX.find_iter(raw_line) {
            push(coin.as_str().to_string());
        }

        let line = normalize(raw_line);
        if !PRIZE_HINT_REGEX.is_match(&line) {
            continue;
        }

        let next_line = || lines.get(index + 1).map(|l| normalize(l)).unwrap_or_default();

        let labeled = if PRIZE_LABEL_REGEX.is_match(&line) {
            let after_colon = line
                .split_once(':')
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_default();
            if after_colon.is_empty() {
                next_line()
            } else {
                after_colon
            }
        } else if let Some(after) = WILL_RECEIVE_REGEX.split(&line).nth(1) {
            after.trim().to_string()
        } else if PRIZE_HEADING_REGEX.is_match(&line) {
            next_line()
        } else {
            String::new()
        };

        push(labeled);
    }

    candidates.join(PRIZE_SEPARATOR)
}

/// Joins the lines from `start` onwards and normalizes the block once.
pub fn extract_description(lines: &[&str], start: usize) -> String {
    lines
        .get(start..)
        .map(|rest| normalize(&rest.join("\n")))
        .unwrap_or_default()
}

/// Builds an [`Event`] from extracted fields and caller options.
///
/// The id is `<date>-<slug>`; when no date was found, `now`'s UTC date is
/// used as the prefix.
pub fn assemble(fields: ExtractedFields, options: &ExtractionOptions, now: DateTime<Utc>) -> Event {
    let date_prefix = if fields.date.is_empty() {
        now.format(DATE_FORMAT).to_string()
    } else {
        fields.date.clone()
    };
    let id = format!("{}-{}", date_prefix, slugify(&fields.title));

    Event {
        id,
        title: fields.title,
        date: fields.date,
        time: fields.time,
        status: EventStatus::Planned,
        description: fields.description,
        prize: Some(fields.prize).filter(|p| !p.is_empty()),
        poster_url: options.poster_url.clone().and_then(non_blank),
        discord_url: options.discord_url.clone().and_then(non_blank),
    }
}

/// Builds a URL-safe slug from a title.
///
/// Lowercases, drops everything outside `[a-z0-9\s-]`, collapses whitespace
/// runs to `-` and keeps at most [`MAX_SLUG_LENGTH`] characters.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = SLUG_STRIP_REGEX.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_REGEX.replace_all(&stripped, "-");
    hyphenated.chars().take(MAX_SLUG_LENGTH).collect()
}

/// Returns the timestamp-based id used when nothing could be parsed.
pub fn fallback_id(now: DateTime<Utc>) -> String {
    format!("event-{}", now.timestamp_millis())
}
