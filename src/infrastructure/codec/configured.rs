//! Codec registry built from the configured codec list

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CodecError, CodecRegistry};
use crate::domain::codec::{CodecCapabilities, CodecDescriptor, CodecId};
use crate::domain::config::CodecConfig;

/// Codec registry backed by the config file's `[[codecs]]` entries.
///
/// Ids are assigned in list order. A codec with a `configure` command line
/// has a configuration routine; running it spawns that command with the
/// terminal attached and waits for it to exit.
pub struct ConfiguredCodecRegistry {
    codecs: Vec<CodecDescriptor>,
    commands: HashMap<CodecId, Vec<String>>,
}

impl ConfiguredCodecRegistry {
    pub fn from_config(entries: &[CodecConfig]) -> Self {
        let mut codecs = Vec::with_capacity(entries.len());
        let mut commands = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            let id = CodecId(idx as u32);
            let mut capabilities = CodecCapabilities::NONE;
            if entry.decoder {
                capabilities = capabilities | CodecCapabilities::CAN_DECODE;
            }
            if entry.encoder {
                capabilities = capabilities | CodecCapabilities::CAN_ENCODE;
            }
            if let Some(command) = entry.configure.as_ref().filter(|c| !c.is_empty()) {
                capabilities = capabilities | CodecCapabilities::HAS_CONFIG;
                commands.insert(id, command.clone());
            }

            codecs.push(CodecDescriptor::new(
                id,
                entry.extension.clone(),
                entry.name.clone(),
                capabilities,
            ));
        }

        Self { codecs, commands }
    }

    /// Find a codec by display name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&CodecDescriptor> {
        let wanted = name.trim();
        self.codecs
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
    }
}

#[async_trait]
impl CodecRegistry for ConfiguredCodecRegistry {
    fn codecs(&self) -> Vec<CodecDescriptor> {
        self.codecs.clone()
    }

    async fn configure(&self, id: CodecId) -> Result<(), CodecError> {
        let codec = self
            .codecs
            .iter()
            .find(|c| c.id == id)
            .ok_or(CodecError::UnknownCodec(id))?;
        let command = self
            .commands
            .get(&id)
            .ok_or_else(|| CodecError::NotConfigurable(codec.name.clone()))?;

        let (program, args) = command
            .split_first()
            .ok_or_else(|| CodecError::NotConfigurable(codec.name.clone()))?;

        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CodecError::ToolNotFound(program.clone())
                } else {
                    CodecError::ConfigureFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(CodecError::ConfigureFailed(format!(
                "{} exited with status: {}",
                program, status
            )));
        }

        Ok(())
    }
}
