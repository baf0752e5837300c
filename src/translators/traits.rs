use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;

use crate::item::Item;
use crate::page::PageDocument;

/// Trait for site-specific metadata translators.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Unique identifier for this translator.
    fn site_id(&self) -> &'static str;

    /// URL patterns this translator matches.
    fn url_patterns(&self) -> &[Regex];

    /// Check if this translator can handle the given URL.
    fn can_handle(&self, url: &str) -> bool {
        self.url_patterns().iter().any(|p| p.is_match(url))
    }

    /// Normalize a URL for this site.
    fn normalize_url(&self, url: &str) -> String {
        url.to_string()
    }

    /// Priority for translator selection (higher = preferred).
    fn priority(&self) -> i32 {
        0
    }

    /// Record type this translator produces for a matching URL.
    fn item_type(&self) -> &'static str;

    /// Extract the bibliographic record for the URL.
    ///
    /// Returns `Ok(None)` when the source reports no post for the URL; that
    /// is the defined not-found path, logged but never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the remote fetch or
    /// decode fails.
    async fn translate(&self, url: &str, doc: &PageDocument) -> Result<Option<Item>>;
}
