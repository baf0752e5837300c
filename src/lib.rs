//! Bluesky citation extractor library.
//!
//! Turns a Bluesky post page URL into a canonical bibliographic record by
//! fetching the post's thread from the public read API and mapping it into
//! the reference-manager item schema, with a snapshot of the source page
//! attached.

pub mod clock;
pub mod config;
pub mod constants;
pub mod item;
pub mod page;
pub mod text;
pub mod translators;
