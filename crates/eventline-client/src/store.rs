//! Local event store.
//!
//! Events are kept as a pretty-printed JSON array in a single file
//! (`~/.local/share/eventline/events.json` by default).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use eventline_core::{Event, EventStatus};
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

/// The persisted collection of events.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    path: PathBuf,
}

impl EventStore {
    /// Loads events from `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON array of
    /// events is an error, so that a later save does not overwrite it.
    pub fn load(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let events = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str::<Vec<Event>>(&content).map_err(|e| {
                ClientError::Store(format!("failed to parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), count = events.len(), "loaded events");
        Ok(Self { events, path })
    }

    /// Returns the file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the event with the given id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Appends an event under a fresh timestamp-based id and saves.
    ///
    /// The id is `event-<unix millis>`; the millis are bumped while the id
    /// is already taken. Returns the stored id.
    pub fn add(&mut self, mut event: Event, now: DateTime<Utc>) -> ClientResult<String> {
        let mut millis = now.timestamp_millis();
        while self.get(&format!("event-{}", millis)).is_some() {
            millis += 1;
        }
        event.id = format!("event-{}", millis);

        let id = event.id.clone();
        info!(id = %id, title = %event.title, "adding event");
        self.events.push(event);
        self.save()?;
        Ok(id)
    }

    /// Changes the status of a stored event and saves.
    pub fn set_status(&mut self, id: &str, status: EventStatus) -> ClientResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        event.status = status;
        info!(id = %id, status = %status, "updated event status");
        self.save()
    }

    /// Removes a stored event and saves. Returns the removed event.
    pub fn remove(&mut self, id: &str) -> ClientResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        let removed = self.events.remove(index);
        info!(id = %id, "removed event");
        self.save()?;
        Ok(removed)
    }

    /// Persists the current events to disk.
    pub fn save(&self) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = self.events.len(), "saved events");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn sample_event() -> Event {
        Event::new("2025-03-01-quiz")
            .with_title("Quiz")
            .with_date("2025-03-01")
            .with_prize("50c")
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::load(dir.path().join("events.json")).unwrap();
        assert!(store.events().is_empty());
    }

    #[test]
    fn malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = EventStore::load(&path).unwrap_err();
        assert!(matches!(err, ClientError::Store(_)));
    }

    #[test]
    fn add_overwrites_id_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.json");

        let mut store = EventStore::load(&path).unwrap();
        let id = store.add(sample_event(), utc_millis(1_700_000_000_000)).unwrap();
        assert_eq!(id, "event-1700000000000");

        let reloaded = EventStore::load(&path).unwrap();
        assert_eq!(reloaded.events().len(), 1);
        let stored = reloaded.get(&id).unwrap();
        assert_eq!(stored.title, "Quiz");
        assert_eq!(stored.prize.as_deref(), Some("50c"));
    }

    #[test]
    fn add_avoids_id_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::load(dir.path().join("events.json")).unwrap();
        let now = utc_millis(5_000);

        let first = store.add(sample_event(), now).unwrap();
        let second = store.add(sample_event(), now).unwrap();
        assert_eq!(first, "event-5000");
        assert_eq!(second, "event-5001");
    }

    #[test]
    fn set_status_updates_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut store = EventStore::load(&path).unwrap();
        let id = store.add(sample_event(), utc_millis(1)).unwrap();

        store.set_status(&id, EventStatus::Completed).unwrap();

        let reloaded = EventStore::load(&path).unwrap();
        assert_eq!(reloaded.get(&id).unwrap().status, EventStatus::Completed);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::load(dir.path().join("events.json")).unwrap();
        assert!(matches!(
            store.set_status("nope", EventStatus::Cancelled),
            Err(ClientError::NotFound(_))
        ));
        assert!(matches!(store.remove("nope"), Err(ClientError::NotFound(_))));
    }

    #[test]
    fn remove_deletes_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut store = EventStore::load(&path).unwrap();
        let id = store.add(sample_event(), utc_millis(1)).unwrap();

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.title, "Quiz");
        assert!(EventStore::load(&path).unwrap().events().is_empty());
    }

    #[test]
    fn reads_hand_written_events_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id": "e1", "title": "Movie Night", "date": "2025-04-04", "status": "confirmed", "posterUrl": "https://x.test/p.png"}]"#,
        )
        .unwrap();

        let store = EventStore::load(&path).unwrap();
        let event = store.get("e1").unwrap();
        assert_eq!(event.status, EventStatus::Confirmed);
        assert_eq!(event.poster_url.as_deref(), Some("https://x.test/p.png"));
        assert_eq!(event.description, "");
    }
}
