pub mod adapters;
mod local_filesystem;
mod system_clock;

pub use adapters::MemoryFilesystem;
pub use local_filesystem::LocalFilesystem;
pub use system_clock::SystemClock;
