//! Shared constants used across the application.

/// User agent string used for page and API requests.
pub const CITATION_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Base URL of the public Bluesky read API (no auth required).
pub const DEFAULT_API_BASE: &str = "https://public.api.bsky.app";

/// Maximum title length before the cleaned post text is ellipsized.
pub const TITLE_MAX_CHARS: usize = 140;

/// Marker appended to an ellipsized title.
pub const ELLIPSIS: char = '\u{2026}';
