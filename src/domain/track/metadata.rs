//! Track metadata entity

use serde::{Deserialize, Serialize};

use crate::domain::text::truncate_chars;

/// CD-Text field limit
pub const MAX_CD_TEXT_LEN: usize = 160;

/// Title and artist of one audio track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

impl TrackMetadata {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: bound_cd_text(title),
            artist: bound_cd_text(artist),
        }
    }
}

/// Apply the CD-Text length bound
pub fn bound_cd_text(text: &str) -> String {
    truncate_chars(text, MAX_CD_TEXT_LEN)
}

/// A numbered track in a track sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub number: u32,
    #[serde(flatten)]
    pub metadata: TrackMetadata,
}

/// List of tracks on a disc
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSheet {
    #[serde(default, rename = "track")]
    pub tracks: Vec<TrackEntry>,
}

impl TrackSheet {
    pub fn track(&self, number: u32) -> Option<&TrackEntry> {
        self.tracks.iter().find(|t| t.number == number)
    }

    pub fn track_mut(&mut self, number: u32) -> Option<&mut TrackEntry> {
        self.tracks.iter_mut().find(|t| t.number == number)
    }
}
