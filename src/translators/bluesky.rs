use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::traits::Translator;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::constants::{CITATION_USER_AGENT, TITLE_MAX_CHARS};
use crate::item::{Attachment, Item};
use crate::page::PageDocument;
use crate::text;

static PATTERNS: std::sync::LazyLock<Vec<Regex>> = std::sync::LazyLock::new(|| {
    vec![
        Regex::new(r"^https?://bsky\.app/profile/[^/]+/post/[a-zA-Z0-9]+").unwrap(),
        Regex::new(r"^https?://bsky\.social/profile/[^/]+/post/[a-zA-Z0-9]+").unwrap(),
    ]
});

// Regex to extract handle and post ID from URL
static URL_PARSER: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^https?://bsky\.(app|social)/profile/([^/]+)/post/([a-zA-Z0-9]+)").unwrap()
});

/// Format of the timestamp embedded in the reply-count note.
const NOTE_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Error)]
#[error("not a Bluesky post URL: {url}")]
pub struct InvalidPostUrl {
    pub url: String,
}

/// Handle and post ID extracted from a post page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPostUrl {
    pub handle: String,
    pub post_id: String,
}

/// Parse handle and post ID from a Bluesky URL.
///
/// # Errors
///
/// Returns [`InvalidPostUrl`] when either component is missing; the caller
/// decides whether that aborts or skips the URL.
pub fn parse_url(url: &str) -> Result<ParsedPostUrl, InvalidPostUrl> {
    URL_PARSER
        .captures(url)
        .map(|caps| ParsedPostUrl {
            handle: caps.get(2).unwrap().as_str().to_string(),
            post_id: caps.get(3).unwrap().as_str().to_string(),
        })
        .ok_or_else(|| InvalidPostUrl {
            url: url.to_string(),
        })
}

/// Response from getPostThread API
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    #[serde(default)]
    pub thread: Option<Thread>,
}

#[derive(Debug, Deserialize)]
pub struct Thread {
    #[serde(default)]
    pub post: Option<Post>,
    #[serde(default)]
    pub replies: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct Post {
    pub record: PostRecord,
    pub author: Author,
    #[serde(default, rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(default, rename = "repostCount")]
    pub repost_count: Option<u64>,
    #[serde(default, rename = "quoteCount")]
    pub quote_count: Option<u64>,
    #[serde(default)]
    pub embed: Option<Embed>,
}

#[derive(Debug, Deserialize)]
pub struct PostRecord {
    pub text: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub langs: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct Author {
    pub handle: String,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// An embedded reference to another record (quote post).
#[derive(Debug, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub record: Option<EmbedRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedRecord {
    #[serde(default)]
    pub author: Option<QuotedAuthor>,
    #[serde(default)]
    pub value: Option<QuotedValue>,
}

#[derive(Debug, Deserialize)]
pub struct QuotedAuthor {
    pub handle: String,
}

#[derive(Debug, Deserialize)]
pub struct QuotedValue {
    pub text: String,
}

pub struct BlueskyTranslator {
    client: reqwest::Client,
    api_base: String,
    clock: Arc<dyn Clock>,
}

impl BlueskyTranslator {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Translator with an injected clock, so the reply-count note's
    /// timestamp is reproducible under test.
    #[must_use]
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(CITATION_USER_AGENT)
                .timeout(config.http_timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            clock,
        }
    }

    /// Fetch a post's thread from the public read API.
    async fn fetch_thread(&self, parsed: &ParsedPostUrl) -> Result<ThreadResponse> {
        let at_uri = format!(
            "at://{}/app.bsky.feed.post/{}",
            parsed.handle, parsed.post_id
        );
        let url = format!(
            "{}/xrpc/app.bsky.feed.getPostThread?uri={}",
            self.api_base,
            urlencoding::encode(&at_uri)
        );

        let response: ThreadResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch Bluesky post thread")?
            .error_for_status()
            .context("Post thread fetch returned error")?
            .json()
            .await
            .context("Failed to parse post thread response")?;

        Ok(response)
    }
}

#[async_trait]
impl Translator for BlueskyTranslator {
    fn site_id(&self) -> &'static str {
        "bluesky"
    }

    fn url_patterns(&self) -> &[Regex] {
        &PATTERNS
    }

    fn priority(&self) -> i32 {
        100
    }

    fn normalize_url(&self, url: &str) -> String {
        // Normalize to bsky.app format. Only the host may be rewritten;
        // handles in the path frequently end in .bsky.social themselves.
        url.replacen("://bsky.social/", "://bsky.app/", 1)
    }

    fn item_type(&self) -> &'static str {
        "forumPost"
    }

    async fn translate(&self, url: &str, doc: &PageDocument) -> Result<Option<Item>> {
        let parsed = parse_url(url).context("Invalid Bluesky URL format")?;
        let data = self.fetch_thread(&parsed).await?;

        let Some(thread) = data.thread else {
            tracing::debug!(%url, "No thread in API response; skipping skeet");
            return Ok(None);
        };
        let Some(post) = thread.post else {
            tracing::debug!(%url, "No post in thread response; skipping skeet");
            return Ok(None);
        };

        let reply_count = thread.replies.as_ref().map_or(0, Vec::len);
        Ok(Some(build_item(
            url,
            &post,
            reply_count,
            doc,
            self.clock.now_utc(),
        )))
    }
}

/// Map a fetched post into the bibliographic record.
///
/// Pure given its inputs; `now` is the instant stamped into the reply-count
/// note.
#[must_use]
pub fn build_item(
    url: &str,
    post: &Post,
    reply_count: usize,
    doc: &PageDocument,
    now: DateTime<Utc>,
) -> Item {
    let mut item = Item::forum_post();

    // Full post text is always preserved in the abstract; the title gets
    // the ellipsized form once it hits the length cap.
    let cleaned = text::clean_whitespace(&post.record.text);
    item.title = if cleaned.chars().count() < TITLE_MAX_CHARS {
        cleaned.clone()
    } else {
        text::ellipsize(&cleaned, TITLE_MAX_CHARS, true)
    };
    item.abstract_note = cleaned;

    item.forum_title = "Bluesky".to_string();
    item.post_type = "Skeet".to_string();
    item.url = url.to_string();
    item.date = post
        .record
        .created_at
        .clone()
        .or_else(|| post.author.created_at.clone());
    item.language = match &post.record.langs {
        Some(langs) if !langs.is_empty() => langs.join(", "),
        _ => "en".to_string(),
    };

    let author_name = post
        .author
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&post.author.handle);
    item.creators.push(text::clean_author(author_name, "author"));

    item.extra = metrics_extra(post);

    // Quote-attribution note precedes the reply-count note.
    if let Some(record) = post.embed.as_ref().and_then(|e| e.record.as_ref()) {
        if let (Some(author), Some(value)) = (record.author.as_ref(), record.value.as_ref()) {
            item.notes.push(format!(
                "This post is quoting a post by @{}: \"{}\"",
                author.handle, value.text
            ));
        }
    }
    if reply_count > 0 {
        item.notes.push(format!(
            "This post had {} direct replies as of {}",
            reply_count,
            now.format(NOTE_TIMESTAMP_FORMAT)
        ));
    }

    item.attachments.push(Attachment::snapshot(doc));
    item
}

/// Render the defined engagement counts as a pipe-separated field.
///
/// The counts are collected first and joined once; a count that is absent
/// from the payload is skipped, a count of zero is kept.
fn metrics_extra(post: &Post) -> Option<String> {
    let defined: Vec<String> = [
        ("Likes", post.like_count),
        ("Reposts", post.repost_count),
        ("Quotes", post.quote_count),
    ]
    .into_iter()
    .filter_map(|(label, count)| count.map(|n| format!("{label}: {n}")))
    .collect();

    if defined.is_empty() {
        None
    } else {
        Some(defined.join(" | "))
    }
}
