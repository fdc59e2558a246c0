//! Directory utility port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::target::TargetPath;

/// Directory errors
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("No host directory configured for drive {0}:")]
    UnmappedDrive(char),

    #[error("Failed to create directory: {0}")]
    CreateFailed(String),

    #[error("Path leaves its drive root: {0}")]
    OutsideDriveRoot(String),
}

/// Port for filesystem directory checks
#[async_trait]
pub trait DirectoryUtility: Send + Sync {
    /// Check whether the directory exists.
    async fn exists(&self, path: &TargetPath) -> bool;

    /// Create the directory, including missing parents.
    async fn create(&self, path: &TargetPath) -> Result<(), DirectoryError>;
}
