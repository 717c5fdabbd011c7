//! Public API facade over the workspace commands using the host filesystem
//! and local clock.

use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{CreateOutcome, PruneOptions, PruneOutcome, create, prune};
use crate::domain::{AppError, RetentionPolicy, resolve_target};
use crate::services::{LocalFilesystem, SystemClock};

fn local_context() -> AppContext<LocalFilesystem, SystemClock> {
    AppContext::new(LocalFilesystem::new(), SystemClock)
}

/// Create today's workspace under `path`.
///
/// `path` may be relative; it is resolved against the current directory and
/// created along with the workspace if missing.
pub fn create_at(path: &Path) -> Result<CreateOutcome, AppError> {
    let target = resolve_target(path)?;
    create::execute(&local_context(), &target)
}

/// Remove expired workspaces under `path`.
pub fn prune_at(path: &Path, retention: RetentionPolicy) -> Result<PruneOutcome, AppError> {
    prune_with(path, PruneOptions { retention, dry_run: false })
}

/// Prune with explicit options (e.g. dry run).
pub fn prune_with(path: &Path, options: PruneOptions) -> Result<PruneOutcome, AppError> {
    let target = resolve_target(path)?;
    prune::execute(&local_context(), &target, options)
}
