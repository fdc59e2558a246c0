//! Persisted save-tracks settings

use crate::domain::target::TargetPath;

/// Settings shared between save-tracks sessions.
///
/// The target folder is written only through [`SaveTracksSettings::set_target`],
/// which the save-tracks workflow calls after a successful confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveTracksSettings {
    target: String,
}

impl SaveTracksSettings {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: TargetPath::bound_input(&target.into()),
        }
    }

    /// Last-used target folder (may be empty)
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, target: &TargetPath) {
        self.target = target.as_str().to_string();
    }
}
