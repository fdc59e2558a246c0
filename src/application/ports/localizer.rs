//! Localization port interface

use crate::domain::localization::StringKey;

/// Port for translated UI strings
pub trait Localizer: Send + Sync {
    /// Look up a translated string.
    ///
    /// # Arguments
    /// * `section` - Section name (e.g. "savetracks")
    /// * `id` - String id within the section
    ///
    /// # Returns
    /// The translation, or None if the language has no entry
    fn lookup(&self, section: &str, id: u32) -> Option<String>;

    /// Translated text for `key`, falling back to its built-in default
    fn text(&self, key: &StringKey) -> String {
        self.lookup(key.section, key.id)
            .unwrap_or_else(|| key.default_text.to_string())
    }
}

/// Blanket implementation for boxed localizer types
impl Localizer for Box<dyn Localizer> {
    fn lookup(&self, section: &str, id: u32) -> Option<String> {
        self.as_ref().lookup(section, id)
    }
}
