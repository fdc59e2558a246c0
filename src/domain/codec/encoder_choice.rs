//! Encoder choice list presented to the user

use std::fmt;

use super::descriptor::{CodecCapabilities, CodecDescriptor, CodecId};

/// Label of the always-present first entry
pub const DEFAULT_ENCODER_LABEL: &str = "Wave";

/// The user's chosen encoder, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncoderSelection {
    /// No encoder: tracks are written by the ripper's own wave output
    #[default]
    Default,
    Codec(CodecId),
}

impl EncoderSelection {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn codec_id(&self) -> Option<CodecId> {
        match self {
            Self::Default => None,
            Self::Codec(id) => Some(*id),
        }
    }
}

impl fmt::Display for EncoderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Codec(id) => write!(f, "codec {}", id),
        }
    }
}

/// One entry in the encoder list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderChoice {
    Default,
    Codec {
        id: CodecId,
        name: String,
        capabilities: CodecCapabilities,
    },
}

impl EncoderChoice {
    pub fn label(&self) -> &str {
        match self {
            Self::Default => DEFAULT_ENCODER_LABEL,
            Self::Codec { name, .. } => name,
        }
    }

    /// The selection this entry resolves to on confirmation
    pub fn selection(&self) -> EncoderSelection {
        match self {
            Self::Default => EncoderSelection::Default,
            Self::Codec { id, .. } => EncoderSelection::Codec(*id),
        }
    }

    /// Whether the "configure encoder" affordance is enabled for this entry
    pub fn is_configurable(&self) -> bool {
        match self {
            Self::Default => false,
            Self::Codec { capabilities, .. } => capabilities.has_config(),
        }
    }
}

impl From<&CodecDescriptor> for EncoderChoice {
    fn from(codec: &CodecDescriptor) -> Self {
        Self::Codec {
            id: codec.id,
            name: codec.name.clone(),
            capabilities: codec.capabilities,
        }
    }
}

/// Ordered encoder list; entry 0 is always [`EncoderChoice::Default`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderChoices {
    entries: Vec<EncoderChoice>,
}

impl EncoderChoices {
    /// Build the list from the registry's codecs, keeping registry order.
    /// Codecs for the reserved wave extension and codecs that cannot
    /// encode are skipped.
    pub fn from_codecs(codecs: &[CodecDescriptor]) -> Self {
        let mut entries = Vec::with_capacity(codecs.len() + 1);
        entries.push(EncoderChoice::Default);
        entries.extend(
            codecs
                .iter()
                .filter(|c| c.is_offered_encoder())
                .map(EncoderChoice::from),
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the default entry is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EncoderChoice> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncoderChoice> {
        self.entries.iter()
    }

    /// Find an entry by label (case-insensitive)
    pub fn position_by_label(&self, label: &str) -> Option<usize> {
        let wanted = label.trim();
        self.entries
            .iter()
            .position(|e| e.label().eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codecs() -> Vec<CodecDescriptor> {
        vec![
            CodecDescriptor::new(
                CodecId(0),
                ".wav",
                "Wave",
                CodecCapabilities::CAN_DECODE | CodecCapabilities::CAN_ENCODE,
            ),
            CodecDescriptor::new(
                CodecId(1),
                ".mp3",
                "LAME MP3",
                CodecCapabilities::CAN_ENCODE | CodecCapabilities::HAS_CONFIG,
            ),
            CodecDescriptor::new(CodecId(2), ".m4a", "AAC", CodecCapabilities::CAN_DECODE),
            CodecDescriptor::new(CodecId(3), ".flac", "FLAC", CodecCapabilities::CAN_ENCODE),
        ]
    }

    #[test]
    fn first_entry_is_default() {
        let choices = EncoderChoices::from_codecs(&codecs());
        assert_eq!(choices.get(0), Some(&EncoderChoice::Default));
        assert_eq!(choices.get(0).unwrap().label(), "Wave");
    }

    #[test]
    fn filters_wave_and_non_encoders() {
        let choices = EncoderChoices::from_codecs(&codecs());
        let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Wave", "LAME MP3", "FLAC"]);
    }

    #[test]
    fn empty_registry_has_only_default() {
        let choices = EncoderChoices::from_codecs(&[]);
        assert_eq!(choices.len(), 1);
        assert!(!choices.is_empty());
    }

    #[test]
    fn configurable_requires_codec_with_config() {
        let choices = EncoderChoices::from_codecs(&codecs());
        assert!(!choices.get(0).unwrap().is_configurable());
        assert!(choices.get(1).unwrap().is_configurable());
        assert!(!choices.get(2).unwrap().is_configurable());
    }

    #[test]
    fn selection_resolves_codec_id() {
        let choices = EncoderChoices::from_codecs(&codecs());
        assert_eq!(
            choices.get(0).unwrap().selection(),
            EncoderSelection::Default
        );
        assert_eq!(
            choices.get(2).unwrap().selection(),
            EncoderSelection::Codec(CodecId(3))
        );
    }

    #[test]
    fn position_by_label_is_case_insensitive() {
        let choices = EncoderChoices::from_codecs(&codecs());
        assert_eq!(choices.position_by_label("lame mp3"), Some(1));
        assert_eq!(choices.position_by_label(" wave "), Some(0));
        assert_eq!(choices.position_by_label("AAC"), None);
    }
}
