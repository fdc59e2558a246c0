//! Filesystem directory adapter

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{DirectoryError, DirectoryUtility};
use crate::domain::target::TargetPath;

/// Directory utility on the local filesystem.
///
/// Windows hosts use drive-qualified paths as-is. Other hosts translate the
/// drive letter through the configured drive roots, so `C:\Music` with
/// `C = "/mnt/c"` becomes `/mnt/c/Music`.
#[derive(Debug, Clone, Default)]
pub struct FsDirectory {
    #[cfg_attr(windows, allow(dead_code))]
    drive_roots: BTreeMap<char, String>,
}

impl FsDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with drive roots keyed by upper-case drive letter
    pub fn with_drive_roots(drive_roots: BTreeMap<char, String>) -> Self {
        Self { drive_roots }
    }

    /// Host path for a drive-qualified target
    #[cfg(windows)]
    pub fn host_path(&self, target: &TargetPath) -> Result<PathBuf, DirectoryError> {
        Ok(PathBuf::from(target.as_str()))
    }

    /// Host path for a drive-qualified target
    #[cfg(not(windows))]
    pub fn host_path(&self, target: &TargetPath) -> Result<PathBuf, DirectoryError> {
        let letter = target.drive_letter();
        let root = self
            .drive_roots
            .get(&letter)
            .ok_or(DirectoryError::UnmappedDrive(letter))?;

        let mut path = PathBuf::from(root);
        for component in target.rest().split(['\\', '/']) {
            match component {
                "" | "." => {}
                ".." => return Err(DirectoryError::OutsideDriveRoot(target.to_string())),
                _ => path.push(component),
            }
        }
        Ok(path)
    }
}

#[async_trait]
impl DirectoryUtility for FsDirectory {
    async fn exists(&self, path: &TargetPath) -> bool {
        match self.host_path(path) {
            Ok(host) => fs::metadata(&host)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn create(&self, path: &TargetPath) -> Result<(), DirectoryError> {
        let host = self.host_path(path)?;
        fs::create_dir_all(&host)
            .await
            .map_err(|e| DirectoryError::CreateFailed(format!("{}: {}", host.display(), e)))
    }
}
