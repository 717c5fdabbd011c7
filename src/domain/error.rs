use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dayspace operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The supplied path could not be converted to an absolute path.
    #[error("Failed to resolve path '{path}': {source}")]
    PathResolution {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Creating the dated workspace directory failed.
    #[error("Failed to create workspace '{}': {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target directory could not be enumerated.
    #[error("Failed to read directory '{}': {source}", .path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An expired workspace could not be removed.
    #[error("Failed to remove workspace '{}': {source}", .path.display())]
    DirectoryRemoval {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Retention deadline outside the recognized values.
    #[error("Invalid deadline {0}: must be -1 (never prune), 0 (prune all), or a positive number of days")]
    InvalidDeadline(i64),

    /// Outcome could not be rendered for output.
    #[error("Failed to render output: {0}")]
    Output(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::PathResolution { source, .. }
            | AppError::DirectoryCreation { source, .. }
            | AppError::DirectoryListing { source, .. }
            | AppError::DirectoryRemoval { source, .. } => source.kind(),
            AppError::InvalidDeadline(_) => io::ErrorKind::InvalidInput,
            AppError::Output(_) => io::ErrorKind::Other,
        }
    }
}
