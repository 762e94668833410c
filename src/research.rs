//! This directory provides some features for research.
//! Measure the followings of SMOTEBoost per iteration
//! - Dataset size and minority count
//! - Learner weight and training error
//! - Running time

/// Defines a logger that runs SMOTEBoost and writes a CSV trace.
pub mod logger;

pub use logger::Logger;
