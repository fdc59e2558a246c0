//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod codec;
pub mod config;
pub mod error;
pub mod localization;
pub mod session;
pub mod target;
pub mod text;
pub mod track;

// Re-export common types
pub use codec::{CodecCapabilities, CodecDescriptor, CodecId, EncoderChoices, EncoderSelection};
pub use config::{AppConfig, SaveTracksSettings};
pub use error::*;
pub use localization::LanguageFile;
pub use session::{DialogSession, DialogState};
pub use target::TargetPath;
pub use track::{TrackMetadata, TrackSheet};
