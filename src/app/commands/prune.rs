use std::path::Path;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, RetentionPolicy, WorkspaceDate};
use crate::ports::{Clock, WorkspaceFilesystem};

/// Options for the prune command.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneOptions {
    pub retention: RetentionPolicy,
    /// Report expired workspaces without removing them.
    pub dry_run: bool,
}

/// Result of pruning expired workspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    /// Workspace names removed (or selected, in dry-run mode), oldest first.
    pub removed: Vec<String>,
    pub count: usize,
    pub dry_run: bool,
}

/// Remove workspaces under `target` whose age meets the retention policy.
///
/// Entries that are not directories, or whose names are not workspace
/// dates, are left alone. The first removal failure aborts the run.
pub fn execute<F, C>(
    ctx: &AppContext<F, C>,
    target: &Path,
    options: PruneOptions,
) -> Result<PruneOutcome, AppError>
where
    F: WorkspaceFilesystem,
    C: Clock,
{
    let dry_run = options.dry_run;
    if options.retention.is_disabled() {
        tracing::debug!("retention disabled; nothing to prune");
        return Ok(PruneOutcome { dry_run, ..PruneOutcome::default() });
    }

    let mut workspaces: Vec<WorkspaceDate> = ctx
        .filesystem()
        .list_dir(target)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .filter_map(|entry| {
            let parsed = WorkspaceDate::from_dir_name(&entry.name);
            if parsed.is_none() {
                tracing::trace!(name = %entry.name, "skipping non-workspace directory");
            }
            parsed
        })
        .collect();
    workspaces.sort();

    let now = ctx.clock().now();
    let mut removed = Vec::new();

    for workspace in workspaces {
        if !options.retention.is_expired(workspace.age_at(now)) {
            continue;
        }

        let name = workspace.dir_name();
        if !dry_run {
            let path = target.join(&name);
            ctx.filesystem().remove_dir_all(&path)?;
            tracing::info!(path = %path.display(), "removed expired workspace");
        }
        removed.push(name);
    }

    Ok(PruneOutcome { count: removed.len(), removed, dry_run })
}
