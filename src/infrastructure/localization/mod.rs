//! Localization infrastructure module

mod language_file;
mod noop;

pub use language_file::{LanguageFileLocalizer, LanguageLoadError};
pub use noop::NoLocalization;

use crate::application::ports::Localizer;

/// Create the localizer for an optional language file.
///
/// A file that cannot be loaded is reported as a warning and the built-in
/// strings are used instead.
pub async fn create_localizer(language_file: Option<&str>) -> Box<dyn Localizer> {
    let Some(path) = language_file.filter(|p| !p.is_empty()) else {
        return Box::new(NoLocalization);
    };

    match LanguageFileLocalizer::load(path).await {
        Ok(localizer) => Box::new(localizer),
        Err(e) => {
            eprintln!("Warning: {}, using built-in strings", e);
            Box::new(NoLocalization)
        }
    }
}
