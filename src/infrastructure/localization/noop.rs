//! No-op localizer adapter

use crate::application::ports::Localizer;

/// Localizer without translations
///
/// Used when no language file is configured; every string keeps its
/// built-in text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl Localizer for NoLocalization {
    fn lookup(&self, _section: &str, _id: u32) -> Option<String> {
        None
    }
}
