
pub use fixed_clock::FixedClock;
