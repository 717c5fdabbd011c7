use crate::ports::{Clock, WorkspaceFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: WorkspaceFilesystem, C: Clock> {
    filesystem: F,
    clock: C,
}

impl<F: WorkspaceFilesystem, C: Clock> AppContext<F, C> {
    /// Create a new application context.
    pub fn new(filesystem: F, clock: C) -> Self {
        Self { filesystem, clock }
    }

    /// Get a reference to the workspace filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
