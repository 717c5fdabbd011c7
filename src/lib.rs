//! dayspace: create and prune date-stamped daily workspace directories.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{create_at, prune_at, prune_with};
pub use app::commands::{CreateOutcome, PruneOptions, PruneOutcome};
pub use domain::{AppError, RetentionPolicy, RunMode, WorkspaceConfig, WorkspaceDate};
pub use ports::{Clock, DirEntry, WorkspaceFilesystem};
pub use services::{LocalFilesystem, MemoryFilesystem, SystemClock};
