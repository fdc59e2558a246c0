//! Codec descriptor value object

use std::fmt;

use serde::Serialize;

/// File extension reserved for the ripper's built-in wave output
pub const DEFAULT_AUDIO_EXTENSION: &str = ".wav";

/// Stable identifier of a codec within its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CodecId(pub u32);

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability bitmask of a codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodecCapabilities(u8);

impl CodecCapabilities {
    pub const NONE: Self = Self(0);
    pub const CAN_DECODE: Self = Self(0x1);
    pub const CAN_ENCODE: Self = Self(0x2);
    pub const HAS_CONFIG: Self = Self(0x4);

    /// Whether every flag in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn can_encode(&self) -> bool {
        self.contains(Self::CAN_ENCODE)
    }

    pub const fn has_config(&self) -> bool {
        self.contains(Self::HAS_CONFIG)
    }
}

impl std::ops::BitOr for CodecCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// An installed audio codec as reported by the codec registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecDescriptor {
    pub id: CodecId,
    /// File extension including the leading dot (e.g. ".mp3")
    pub extension: String,
    /// Human-readable encoder name
    pub name: String,
    pub capabilities: CodecCapabilities,
}

impl CodecDescriptor {
    pub fn new(
        id: CodecId,
        extension: impl Into<String>,
        name: impl Into<String>,
        capabilities: CodecCapabilities,
    ) -> Self {
        Self {
            id,
            extension: extension.into(),
            name: name.into(),
            capabilities,
        }
    }

    /// Whether this codec writes the reserved default extension.
    /// The comparison is exact, so ".WAV" is not the default format.
    pub fn is_default_format(&self) -> bool {
        self.extension == DEFAULT_AUDIO_EXTENSION
    }

    /// Whether this codec can be offered as an encoder choice
    pub fn is_offered_encoder(&self) -> bool {
        !self.is_default_format() && self.capabilities.can_encode()
    }
}
