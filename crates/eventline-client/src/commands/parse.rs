//! `eventline parse`: turn a pasted announcement into an event.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use eventline_core::{
    Event, ExtractionOptions, OutputFormat, format_preview, parse_announcement_at, to_json,
};
use tracing::debug;

use crate::actions;
use crate::cli::ParseArgs;
use crate::error::{ClientError, ClientResult};
use crate::store::EventStore;

/// Shown when the announcement text is empty.
const EMPTY_INPUT_MESSAGE: &str = "Please paste the announcement text";

/// Parses the announcement and prints the result.
///
/// With `--save` the event must pass validation before it is stored.
pub fn run(args: &ParseArgs, store_path: &Path, format: OutputFormat) -> ClientResult<()> {
    let raw = read_input(args.file.as_deref())?;
    let now = Utc::now();
    let event = parse(&raw, args, now)?;
    let json = to_json(&event)?;

    match format {
        OutputFormat::Tty => {
            println!("{}", format_preview(&event));
            println!();
            println!("{}", json);
        }
        OutputFormat::Json => println!("{}", json),
    }

    if args.copy {
        actions::copy_to_clipboard(&json)?;
        eprintln!("Copied JSON to clipboard.");
    }

    if args.save {
        event.validate()?;
        let mut store = EventStore::load(store_path)?;
        let id = store.add(event, now)?;
        eprintln!("Saved event {} to {}", id, store.path().display());
    }

    Ok(())
}

/// Builds extraction options from the arguments and parses `raw`.
pub fn parse(raw: &str, args: &ParseArgs, now: DateTime<Utc>) -> ClientResult<Event> {
    if raw.trim().is_empty() {
        return Err(ClientError::Input(EMPTY_INPUT_MESSAGE.to_string()));
    }

    let mut options = ExtractionOptions::new();
    if let Some(date) = args.date {
        options = options.with_date_override(date);
    }
    if let Some(ref url) = args.poster_url {
        actions::check_url("poster-url", url);
        options = options.with_poster_url(url);
    }
    if let Some(ref url) = args.discord_url {
        actions::check_url("discord-url", url);
        options = options.with_discord_url(url);
    }

    let event = parse_announcement_at(raw, &options, now);
    debug!(id = %event.id, title = %event.title, date = %event.date, "parsed event");
    Ok(event)
}

/// Reads the announcement from a file, or stdin for `None` / `-`.
fn read_input(file: Option<&Path>) -> ClientResult<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use eventline_core::EventStatus;

    fn args() -> ParseArgs {
        ParseArgs {
            file: None,
            poster_url: None,
            discord_url: None,
            date: None,
            copy: false,
            save: false,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn rejects_blank_input() {
        let err = parse("  \n ", &args(), now()).unwrap_err();
        assert_eq!(err.to_string(), "Please paste the announcement text");
    }

    #[test]
    fn applies_options() {
        let args = ParseArgs {
            date: NaiveDate::from_ymd_opt(2025, 7, 4),
            poster_url: Some("https://x.test/p.png".to_string()),
            discord_url: Some("  ".to_string()),
            ..args()
        };
        let event = parse("Fireworks\nDate & Time: <t:1700000000:F>", &args, now()).unwrap();
        assert_eq!(event.date, "2025-07-04");
        assert_eq!(event.time, "22:13");
        assert_eq!(event.poster_url.as_deref(), Some("https://x.test/p.png"));
        assert!(event.discord_url.is_none());
        assert_eq!(event.status, EventStatus::Planned);
    }

    #[test]
    fn reads_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("announcement.txt");
        std::fs::write(&path, "**Quiz**\nDate & Time: Friday").unwrap();

        let raw = read_input(Some(&path)).unwrap();
        let event = parse(&raw, &args(), now()).unwrap();
        assert_eq!(event.title, "Quiz");
        assert_eq!(event.time, "Friday");
        assert_eq!(
            event.validate().unwrap_err().to_string(),
            "Could not detect event date"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_input(Some(&dir.path().join("missing.txt")));
        assert!(matches!(result, Err(ClientError::Io(_))));
    }
}
