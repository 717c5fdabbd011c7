use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{DirEntry, WorkspaceFilesystem};

/// In-memory workspace filesystem.
///
/// Tracks directories and files as absolute paths. Useful for exercising
/// the commands without touching the disk.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeSet<PathBuf>>,
    failing_removals: RefCell<BTreeSet<PathBuf>>,
    list_calls: Cell<usize>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its ancestors).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dir(path.as_ref());
        self
    }

    /// Add a regular file. Its ancestors become directories.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dir(parent);
        }
        self.files.borrow_mut().insert(path.to_path_buf());
        self
    }

    /// Make removal of `path` fail with `PermissionDenied`.
    pub fn fail_removal_of(self, path: impl AsRef<Path>) -> Self {
        self.failing_removals.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.is_dir(path) || self.files.borrow().contains(path)
    }

    /// Number of times `list_dir` has been called.
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    fn insert_dir(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl WorkspaceFilesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<bool, AppError> {
        let blocked = {
            let files = self.files.borrow();
            path.ancestors().any(|ancestor| files.contains(ancestor))
        };
        if blocked {
            return Err(AppError::DirectoryCreation {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "path component is a file"),
            });
        }

        let existed = self.is_dir(path);
        self.insert_dir(path);
        Ok(existed)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        self.list_calls.set(self.list_calls.get() + 1);

        if !self.is_dir(path) {
            let kind = if self.files.borrow().contains(path) {
                io::ErrorKind::NotADirectory
            } else {
                io::ErrorKind::NotFound
            };
            return Err(AppError::DirectoryListing {
                path: path.to_path_buf(),
                source: io::Error::from(kind),
            });
        }

        let child_name = |child: &PathBuf| {
            (child.parent() == Some(path))
                .then(|| child.file_name().map(|n| n.to_string_lossy().into_owned()))
                .flatten()
        };

        let mut entries: Vec<DirEntry> = self
            .dirs
            .borrow()
            .iter()
            .filter_map(child_name)
            .map(|name| DirEntry { name, is_dir: true })
            .collect();
        entries.extend(
            self.files
                .borrow()
                .iter()
                .filter_map(child_name)
                .map(|name| DirEntry { name, is_dir: false }),
        );
        Ok(entries)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let removal_error = |kind| AppError::DirectoryRemoval {
            path: path.to_path_buf(),
            source: io::Error::from(kind),
        };

        if self.failing_removals.borrow().contains(path) {
            return Err(removal_error(io::ErrorKind::PermissionDenied));
        }
        if !self.is_dir(path) {
            return Err(removal_error(io::ErrorKind::NotFound));
        }

        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        self.files.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }
}
