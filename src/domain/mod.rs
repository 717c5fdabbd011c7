pub mod config;
pub mod error;
pub mod retention;
pub mod workspace_date;

pub use config::{DEFAULT_TARGET, RunMode, WorkspaceConfig, resolve_target};
pub use error::AppError;
pub use retention::{DEFAULT_DEADLINE_DAYS, RetentionPolicy};
pub use workspace_date::{WORKSPACE_FORMAT, WorkspaceDate};
