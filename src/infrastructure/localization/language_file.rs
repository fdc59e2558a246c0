//! Language file localizer adapter

use std::path::Path;

use thiserror::Error;
use tokio::fs;

use crate::application::ports::Localizer;
use crate::domain::error::LanguageFileError;
use crate::domain::localization::LanguageFile;

/// Errors loading a language file
#[derive(Debug, Error)]
pub enum LanguageLoadError {
    #[error("Failed to read language file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse language file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: LanguageFileError,
    },
}

/// Localizer backed by a parsed language file
#[derive(Debug, Clone, Default)]
pub struct LanguageFileLocalizer {
    file: LanguageFile,
}

impl LanguageFileLocalizer {
    pub fn new(file: LanguageFile) -> Self {
        Self { file }
    }

    /// Read and parse a language file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LanguageLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| LanguageLoadError::Read {
                path: display.clone(),
                message: e.to_string(),
            })?;

        let file = LanguageFile::parse(&content).map_err(|source| LanguageLoadError::Parse {
            path: display,
            source,
        })?;

        Ok(Self::new(file))
    }
}

impl Localizer for LanguageFileLocalizer {
    fn lookup(&self, section: &str, id: u32) -> Option<String> {
        self.file.get(section, id).map(str::to_string)
    }
}
