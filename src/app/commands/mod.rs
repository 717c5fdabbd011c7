pub mod create;
pub mod prune;

pub use create::CreateOutcome;
pub use prune::{PruneOptions, PruneOutcome};
