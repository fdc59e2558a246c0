//! Track sheet port interface

use async_trait::async_trait;

use crate::domain::error::TrackSheetError;
use crate::domain::track::TrackSheet;

/// Port for track sheet storage
#[async_trait]
pub trait TrackSheetStore: Send + Sync {
    /// Load the track sheet.
    async fn load(&self) -> Result<TrackSheet, TrackSheetError>;

    /// Save the track sheet.
    async fn save(&self, sheet: &TrackSheet) -> Result<(), TrackSheetError>;
}
