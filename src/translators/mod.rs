mod registry;
mod traits;

// Site translators
pub mod bluesky;

pub use registry::TranslatorRegistry;
pub use traits::Translator;

use crate::config::Config;

/// Registry with every built-in translator registered.
///
/// Built per-config rather than held in a global so tests can point the
/// Bluesky translator at a mock API server.
#[must_use]
pub fn default_registry(config: &Config) -> TranslatorRegistry {
    let mut registry = TranslatorRegistry::new();
    registry.register(Box::new(bluesky::BlueskyTranslator::new(config)));
    registry
}
