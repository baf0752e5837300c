//! Shared text utilities: whitespace cleanup, title ellipsizing, and the
//! author-name split heuristic.

use regex::Regex;

use crate::constants::ELLIPSIS;
use crate::item::Creator;

static WHITESPACE_RUN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run (spaces, tabs, newlines) to a single space.
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").to_string()
}

/// Truncate `text` to at most `max_chars` characters, appending an ellipsis.
///
/// With `word_boundary` set, the cut backs up to the last space inside the
/// truncated prefix when one exists, so words are not split mid-way. Counts
/// characters, not bytes.
#[must_use]
pub fn ellipsize(text: &str, max_chars: usize, word_boundary: bool) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    if word_boundary {
        if let Some(idx) = truncated.rfind(' ') {
            truncated.truncate(idx);
        }
    }
    let mut out = truncated.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

/// Split a display name into first/last on the final whitespace.
///
/// Single-token names become a bare last name, matching the reference
/// manager's single-field fallback.
#[must_use]
pub fn clean_author(name: &str, role: &str) -> Creator {
    let name = clean_whitespace(name.trim());
    let (first, last) = match name.rsplit_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (String::new(), name),
    };
    Creator {
        first_name: first,
        last_name: last,
        creator_type: role.to_string(),
    }
}
