//! Canonical bibliographic record emitted for a post.
//!
//! Field names serialize in the reference-manager's camelCase schema, so the
//! JSON form of an [`Item`] can be handed to the host persistence layer
//! as-is.

use serde::{Deserialize, Serialize};

use crate::page::PageDocument;

/// A single creator entry (split name plus role).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub first_name: String,
    pub last_name: String,
    pub creator_type: String,
}

/// An attachment referencing the already-loaded source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub title: String,
    pub mime_type: String,
    pub url: String,
}

impl Attachment {
    /// Snapshot attachment for the given page document.
    #[must_use]
    pub fn snapshot(doc: &PageDocument) -> Self {
        Self {
            title: "Snapshot".to_string(),
            mime_type: "text/html".to_string(),
            url: doc.url.clone(),
        }
    }
}

/// The bibliographic record for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_type: String,
    pub title: String,
    pub abstract_note: String,
    pub forum_title: String,
    pub post_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub language: String,
    pub creators: Vec<Creator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub notes: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub tags: Vec<String>,
}

impl Item {
    /// Empty forum-post record with the fixed type tags filled in.
    #[must_use]
    pub fn forum_post() -> Self {
        Self {
            item_type: "forumPost".to_string(),
            title: String::new(),
            abstract_note: String::new(),
            forum_title: String::new(),
            post_type: String::new(),
            url: String::new(),
            date: None,
            language: String::new(),
            creators: Vec::new(),
            extra: None,
            notes: Vec::new(),
            attachments: Vec::new(),
            tags: Vec::new(),
        }
    }
}
