//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod codec_registry;
pub mod config;
pub mod directory;
pub mod localizer;
pub mod prompter;
pub mod track_sheet;

// Re-export common types
pub use codec_registry::{CodecError, CodecRegistry};
pub use config::ConfigStore;
pub use directory::{DirectoryError, DirectoryUtility};
pub use localizer::Localizer;
pub use prompter::Prompter;
pub use track_sheet::TrackSheetStore;
