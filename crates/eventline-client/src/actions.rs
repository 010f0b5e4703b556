//! Event actions: copy the JSON record, open the announcement link.

use eventline_core::Event;
use tracing::{info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Copies text to the clipboard.
pub fn copy_to_clipboard(text: &str) -> ClientResult<()> {
    info!(bytes = text.len(), "copying to clipboard");

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ClientError::Action(format!("failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClientError::Action(format!("failed to copy to clipboard: {}", e)))?;

    Ok(())
}

/// Opens the event's announcement link in the default browser.
pub fn open_discord_url(event: &Event) -> ClientResult<()> {
    let url = event
        .discord_url
        .as_deref()
        .ok_or_else(|| ClientError::Action("event has no Discord link".into()))?;

    info!(url = %url, "opening Discord link");
    open::that(url).map_err(|e| ClientError::Action(format!("failed to open URL: {}", e)))?;

    Ok(())
}

/// Warns about values that do not look like absolute URLs.
///
/// The value is still used as given; this only reports likely typos.
pub fn check_url(name: &str, value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => true,
        Ok(url) => {
            warn!(option = name, scheme = url.scheme(), "URL does not use http(s)");
            false
        }
        Err(e) => {
            warn!(option = name, value = value, error = %e, "value is not a valid URL");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        assert!(check_url("poster-url", "https://cdn.example.com/poster.png"));
        assert!(check_url("discord-url", "http://discord.com/channels/1/2/3"));
    }

    #[test]
    fn flags_bad_urls() {
        assert!(!check_url("poster-url", "poster.png"));
        assert!(!check_url("poster-url", "ftp://example.com/p.png"));
    }

    #[test]
    fn open_without_link_fails() {
        let event = Event::new("e1");
        assert!(matches!(open_discord_url(&event), Err(ClientError::Action(_))));
    }
}
