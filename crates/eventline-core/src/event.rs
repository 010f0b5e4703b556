//! Event types for community announcements.
//!
//! This module provides the core record types:
//! - [`Event`]: a structured event extracted from an announcement
//! - [`EventStatus`]: the lifecycle status of an event
//! - [`ExtractionOptions`]: caller-supplied overrides for parsing
//! - [`ValidationError`]: why a parsed event is not acceptable

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used for event dates and id prefixes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The lifecycle status of an event.
///
/// The parser only ever assigns [`EventStatus::Planned`]; the other values
/// are set later on stored events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Announced, not yet confirmed.
    #[default]
    Planned,
    /// Confirmed by the organizers.
    Confirmed,
    /// The event took place.
    Completed,
    /// The event was called off.
    Cancelled,
}

impl EventStatus {
    /// Returns the lowercase name used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the uppercase badge text shown next to an event.
    pub fn badge(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(Self::Planned),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(format!("unknown event status: {}", other)),
        }
    }
}

/// Why a parsed event cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The announcement had no usable first line.
    #[error("Could not detect event title")]
    MissingTitle,
    /// Neither a timestamp token nor a date override supplied a date.
    #[error("Could not detect event date")]
    MissingDate,
}

/// A community event, as extracted from an announcement or loaded from the store.
///
/// String fields are always present (possibly empty). Optional fields are
/// omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Identifier: `<date>-<title slug>`, or `event-<unix millis>`.
    pub id: String,
    /// Normalized title.
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD`, or empty when undetected.
    #[serde(default)]
    pub date: String,
    /// `HH:MM` in UTC, raw text after the date label, or empty.
    #[serde(default)]
    pub time: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EventStatus,
    /// Normalized description.
    #[serde(default)]
    pub description: String,
    /// Prize text, when any prize signal was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Link to the original announcement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,
}

impl Event {
    /// Creates a planned event with the given id and every other field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            date: String::new(),
            time: String::new(),
            status: EventStatus::Planned,
            description: String::new(),
            prize: None,
            poster_url: None,
            discord_url: None,
        }
    }

    /// Returns the event date if it is a valid `YYYY-MM-DD` date.
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Checks the fields a caller needs before accepting a parsed event.
    ///
    /// The title is checked before the date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        Ok(())
    }

    /// Builder method to set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method to set the date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder method to set the time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the prize.
    pub fn with_prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = Some(prize.into());
        self
    }

    /// Builder method to set the poster URL.
    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    /// Builder method to set the announcement link.
    pub fn with_discord_url(mut self, url: impl Into<String>) -> Self {
        self.discord_url = Some(url.into());
        self
    }
}

/// Caller-supplied overrides applied while parsing an announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Replaces any date found in the announcement.
    pub date_override: Option<NaiveDate>,
    /// Poster image URL, passed through to the event.
    pub poster_url: Option<String>,
    /// Announcement link, passed through to the event.
    pub discord_url: Option<String>,
}

impl ExtractionOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the date override.
    pub fn with_date_override(mut self, date: NaiveDate) -> Self {
        self.date_override = Some(date);
        self
    }

    /// Builder method to set the poster URL. Blank values are ignored.
    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = non_blank(url.into());
        self
    }

    /// Builder method to set the announcement link. Blank values are ignored.
    pub fn with_discord_url(mut self, url: impl Into<String>) -> Self {
        self.discord_url = non_blank(url.into());
        self
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
