//! Configuration domain module

mod app_config;
mod settings;

pub use app_config::{AppConfig, CodecConfig};
pub use settings::SaveTracksSettings;
