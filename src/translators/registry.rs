use std::cmp::Reverse;

use super::traits::Translator;

/// Registry of site translators.
pub struct TranslatorRegistry {
    translators: Vec<Box<dyn Translator>>,
}

impl TranslatorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            translators: Vec::new(),
        }
    }

    /// Register a translator.
    pub fn register(&mut self, translator: Box<dyn Translator>) {
        self.translators.push(translator);
        // Sort by priority (highest first)
        self.translators.sort_by_key(|t| Reverse(t.priority()));
    }

    /// Find the best translator for a URL.
    #[must_use]
    pub fn find_translator(&self, url: &str) -> Option<&dyn Translator> {
        self.translators
            .iter()
            .find(|t| t.can_handle(url))
            .map(AsRef::as_ref)
    }

    /// Get all registered translators.
    #[must_use]
    pub fn translators(&self) -> &[Box<dyn Translator>] {
        &self.translators
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
