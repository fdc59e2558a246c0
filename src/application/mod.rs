//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod edit_track;
pub mod ports;
pub mod save_tracks;

// Re-export use cases
pub use edit_track::{EditTrackError, EditTrackLabels, EditTrackUseCase};
pub use save_tracks::{SaveTracksError, SaveTracksLabels, SaveTracksUseCase, SaveTracksView};
