//! The loaded source page a record's snapshot attachment points at.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::CITATION_USER_AGENT;

/// A page document that has already been fetched by the host.
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// The page URL as the user saw it.
    pub url: String,
    /// Raw HTML of the page.
    pub html: String,
}

/// Fetch a page so it can be snapshotted alongside the record.
///
/// The library proper takes an already-built [`PageDocument`]; this is the
/// stand-in loader used by the CLI host.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn fetch_document(url: &str, timeout: Duration) -> Result<PageDocument> {
    let client = reqwest::Client::builder()
        .user_agent(CITATION_USER_AGENT)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let html = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch page")?
        .error_for_status()
        .context("Page fetch returned error")?
        .text()
        .await
        .context("Failed to read page body")?;

    Ok(PageDocument {
        url: url.to_string(),
        html,
    })
}
