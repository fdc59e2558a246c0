//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::{AppConfig, SaveTracksSettings};
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (fields are None when the file doesn't exist)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save configuration to storage.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize configuration file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Persist the save-tracks settings, keeping every other stored value.
    async fn save_settings(&self, settings: &SaveTracksSettings) -> Result<(), ConfigError> {
        let mut config = self.load().await?;
        config.apply_save_tracks_settings(settings);
        self.save(&config).await
    }
}
