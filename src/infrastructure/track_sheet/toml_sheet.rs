//! TOML track sheet adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::TrackSheetStore;
use crate::domain::error::TrackSheetError;
use crate::domain::track::TrackSheet;

/// Track sheet stored as TOML:
///
/// ```toml
/// [[track]]
/// number = 1
/// title = "Intro"
/// artist = "Band"
/// ```
pub struct TomlTrackSheetStore {
    path: PathBuf,
}

impl TomlTrackSheetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl TrackSheetStore for TomlTrackSheetStore {
    async fn load(&self) -> Result<TrackSheet, TrackSheetError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| TrackSheetError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| TrackSheetError::ParseError(e.to_string()))
    }

    async fn save(&self, sheet: &TrackSheet) -> Result<(), TrackSheetError> {
        let content = toml::to_string_pretty(sheet)
            .map_err(|e| TrackSheetError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| TrackSheetError::WriteError(e.to_string()))
    }
}
