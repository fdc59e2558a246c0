//! Domain error types

use thiserror::Error;

/// Error when a target folder string is not drive-qualified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid target folder: \"{input}\". Expected a drive-qualified path (e.g., C:\\Music)")]
pub struct TargetPathError {
    pub input: String,
}

/// Error when a language file cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageFileError {
    #[error("Line {line}: entry outside of a section")]
    EntryOutsideSection { line: usize },

    #[error("Line {line}: unterminated section header")]
    UnterminatedSection { line: usize },

    #[error("Line {line}: expected <id>=<text>")]
    MissingSeparator { line: usize },

    #[error("Line {line}: invalid string id \"{id}\"")]
    InvalidId { line: usize, id: String },
}

/// Error when a track sheet operation fails
#[derive(Debug, Clone, Error)]
pub enum TrackSheetError {
    #[error("Failed to read track sheet: {0}")]
    ReadError(String),

    #[error("Failed to parse track sheet: {0}")]
    ParseError(String),

    #[error("Failed to write track sheet: {0}")]
    WriteError(String),

    #[error("Track {0} not found in sheet")]
    TrackNotFound(u32),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
