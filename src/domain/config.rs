//! Run configuration assembled from command-line input.

use std::path::{Path, PathBuf};

use super::{AppError, RetentionPolicy};

/// Default target directory when no path is given.
pub const DEFAULT_TARGET: &str = "./";

/// Operation selected for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Create,
    Prune { retention: RetentionPolicy, dry_run: bool },
}

/// Resolved settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Absolute directory holding the dated workspaces.
    pub target: PathBuf,
    pub mode: RunMode,
}

impl WorkspaceConfig {
    /// Config for creating today's workspace. Retention plays no part here.
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let target = resolve_target(path)?;
        Ok(Self { target, mode: RunMode::Create })
    }

    /// Config for pruning, validating the raw deadline.
    pub fn prune(path: &Path, deadline: i64, dry_run: bool) -> Result<Self, AppError> {
        let retention = RetentionPolicy::from_deadline(deadline)?;
        let target = resolve_target(path)?;
        Ok(Self { target, mode: RunMode::Prune { retention, dry_run } })
    }
}

/// Resolve a possibly relative path against the current directory.
///
/// The path does not need to exist.
pub fn resolve_target(path: &Path) -> Result<PathBuf, AppError> {
    std::path::absolute(path).map_err(|source| AppError::PathResolution {
        path: path.display().to_string(),
        source,
    })
}
