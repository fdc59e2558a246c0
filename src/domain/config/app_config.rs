//! Application configuration value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::settings::SaveTracksSettings;

/// One codec entry of the codec list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// File extension including the leading dot
    pub extension: String,
    /// Display name of the encoder
    pub name: String,
    #[serde(default)]
    pub decoder: bool,
    #[serde(default)]
    pub encoder: bool,
    /// Command line that opens the codec's own configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure: Option<Vec<String>>,
}

impl CodecConfig {
    fn new(extension: &str, name: &str) -> Self {
        Self {
            extension: extension.to_string(),
            name: name.to_string(),
            decoder: true,
            encoder: true,
            configure: None,
        }
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Last-used target folder
    pub target: Option<String>,
    /// Language file used for translations
    pub language_file: Option<String>,
    pub codecs: Option<Vec<CodecConfig>>,
    /// Host directory each drive letter maps to (non-Windows hosts)
    pub drives: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            target: Some(String::new()),
            language_file: None,
            codecs: Some(Self::default_codecs()),
            drives: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Codecs offered when none are configured
    pub fn default_codecs() -> Vec<CodecConfig> {
        vec![
            CodecConfig::new(".wav", "Wave"),
            CodecConfig::new(".mp3", "MP3"),
            CodecConfig::new(".ogg", "Ogg Vorbis"),
            CodecConfig::new(".flac", "FLAC"),
        ]
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    /// Drive maps are merged per letter.
    pub fn merge(self, other: Self) -> Self {
        Self {
            target: other.target.or(self.target),
            language_file: other.language_file.or(self.language_file),
            codecs: other.codecs.or(self.codecs),
            drives: Self::merge_drives(self.drives, other.drives),
        }
    }

    fn merge_drives(
        base: Option<BTreeMap<String, String>>,
        other: Option<BTreeMap<String, String>>,
    ) -> Option<BTreeMap<String, String>> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
        }
    }

    /// Get the persisted save-tracks settings
    pub fn save_tracks_settings(&self) -> SaveTracksSettings {
        SaveTracksSettings::new(self.target.clone().unwrap_or_default())
    }

    /// Store the save-tracks settings back into this config
    pub fn apply_save_tracks_settings(&mut self, settings: &SaveTracksSettings) {
        self.target = Some(settings.target().to_string());
    }

    /// Get codecs, or the default list if not set
    pub fn codecs_or_default(&self) -> Vec<CodecConfig> {
        self.codecs.clone().unwrap_or_else(Self::default_codecs)
    }

    /// Get drive roots keyed by upper-case drive letter
    pub fn drive_roots(&self) -> BTreeMap<char, String> {
        self.drives
            .iter()
            .flatten()
            .filter_map(|(letter, root)| {
                let mut chars = letter.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) | (Some(c), Some(':')) if c.is_ascii_alphabetic() => {
                        Some((c.to_ascii_uppercase(), root.clone()))
                    }
                    _ => None,
                }
            })
            .collect()
    }
}
