mod clock;
mod workspace_filesystem;

pub use clock::Clock;
pub use workspace_filesystem::{DirEntry, WorkspaceFilesystem};
