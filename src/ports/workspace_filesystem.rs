//! Filesystem operations needed to manage dated workspaces.
//!
//! This port covers exactly the capability set the commands rely on:
//! recursive directory creation, listing immediate children, and
//! recursive removal. Path resolution stays in the domain layer.

use std::path::Path;

use crate::domain::AppError;

/// An immediate child of the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Port for workspace directory I/O.
///
/// All paths are absolute.
pub trait WorkspaceFilesystem {
    /// Create a directory and any missing parents.
    ///
    /// Returns `true` if the directory already existed. Existing
    /// directories are not an error.
    fn create_dir_all(&self, path: &Path) -> Result<bool, AppError>;

    /// List the immediate entries of a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
