//! Codec registry port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::codec::{CodecDescriptor, CodecId};

/// Codec errors
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    #[error("Unknown codec {0}")]
    UnknownCodec(CodecId),

    #[error("Codec '{0}' has no configuration")]
    NotConfigurable(String),

    #[error("Configuration tool not found: {0}")]
    ToolNotFound(String),

    #[error("Codec configuration failed: {0}")]
    ConfigureFailed(String),
}

/// Port for the catalogue of installed audio codecs
#[async_trait]
pub trait CodecRegistry: Send + Sync {
    /// All installed codecs, in registry order.
    /// The order is stable for the lifetime of the registry.
    fn codecs(&self) -> Vec<CodecDescriptor>;

    /// Look up a codec by id
    fn codec(&self, id: CodecId) -> Option<CodecDescriptor> {
        self.codecs().into_iter().find(|c| c.id == id)
    }

    /// Run the codec's own configuration routine.
    ///
    /// # Arguments
    /// * `id` - The codec to configure
    ///
    /// # Returns
    /// Ok(()) once the routine has finished, error otherwise
    async fn configure(&self, id: CodecId) -> Result<(), CodecError>;
}
