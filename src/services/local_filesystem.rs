use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{DirEntry, WorkspaceFilesystem};

/// Workspace filesystem backed by the host's real directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceFilesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<bool, AppError> {
        let existed = path.is_dir();
        fs::create_dir_all(path)
            .map_err(|source| AppError::DirectoryCreation { path: path.to_path_buf(), source })?;
        Ok(existed)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        let listing_error =
            |source| AppError::DirectoryListing { path: path.to_path_buf(), source };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            // file_type() does not follow symlinks, so linked directories are not workspaces.
            let is_dir = entry.file_type().map_err(listing_error)?.is_dir();
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(DirEntry { name, is_dir });
        }
        Ok(entries)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_dir_all(path)
            .map_err(|source| AppError::DirectoryRemoval { path: path.to_path_buf(), source })
    }
}
