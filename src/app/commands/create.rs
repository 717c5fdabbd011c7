use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, WorkspaceDate};
use crate::ports::{Clock, WorkspaceFilesystem};

/// Result of creating today's workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOutcome {
    /// Directory base name (`YYYY-MM-DD`).
    pub name: String,
    pub path: PathBuf,
    /// Whether the workspace was already present before this run.
    pub existed: bool,
}

/// Ensure the workspace for the current local date exists under `target`.
pub fn execute<F, C>(ctx: &AppContext<F, C>, target: &Path) -> Result<CreateOutcome, AppError>
where
    F: WorkspaceFilesystem,
    C: Clock,
{
    let name = WorkspaceDate::on(ctx.clock().now()).dir_name();
    let path = target.join(&name);

    let existed = ctx.filesystem().create_dir_all(&path)?;
    if existed {
        tracing::debug!(path = %path.display(), "workspace already exists");
    } else {
        tracing::info!(path = %path.display(), "created workspace");
    }

    Ok(CreateOutcome { name, path, existed })
}
