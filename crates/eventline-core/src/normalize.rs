//! Text normalization for chat-platform announcements.
//!
//! This module provides:
//! - [`normalize`]: strips chat markup (custom emoji, bold, underline,
//!   italic, mass mentions) from a piece of text
//! - [`segment`]: splits raw text into trimmed, non-empty lines
//!
//! # Example
//!
//! ```
//! use eventline_core::normalize::{normalize, segment};
//!
//! assert_eq!(normalize("**Game Night** <:party:1234>"), "Game Night");
//!
//! let lines = segment("  first \n\n second\n");
//! assert_eq!(lines, vec!["first", "second"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Regex for custom emoji tokens, static (`<:name:id>`) and animated (`<a:name:id>`).
static EMOJI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a?:[^:<>\s]+:\d+>").expect("Invalid emoji regex"));

/// Regex for bold markers (`**text**`).
static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

/// Regex for underline markers (`__text__`).
static UNDERLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("Invalid underline regex"));

/// Regex for italic markers (`*text*`).
///
/// Must run after [`BOLD_REGEX`], otherwise `**a**` reads as nested italics.
static ITALIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"));

/// Regex for mass mentions (`@everyone`, `@here`).
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(everyone|here)\b").expect("Invalid mention regex"));

/// Strips chat-platform markup from text.
///
/// Substitutions are applied in a fixed order:
/// 1. Custom emoji tokens are removed
/// 2. Bold markers are unwrapped
/// 3. Underline markers are unwrapped
/// 4. Italic markers are unwrapped
/// 5. `@everyone` / `@here` become plain words
/// 6. Leading and trailing whitespace is trimmed
pub fn normalize(text: &str) -> String {
    let text = EMOJI_REGEX.replace_all(text, "");
    let text = BOLD_REGEX.replace_all(&text, "${1}");
    let text = UNDERLINE_REGEX.replace_all(&text, "${1}");
    let text = ITALIC_REGEX.replace_all(&text, "${1}");
    let text = MENTION_REGEX.replace_all(&text, "${1}");
    text.trim().to_string()
}

/// Splits raw text into trimmed, non-empty lines in document order.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn segment(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
