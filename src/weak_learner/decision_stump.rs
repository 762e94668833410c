//! Defines the decision stump weak learner.

mod dstump;
mod dstump_classifier;

pub use dstump::DecisionStump;
pub use dstump_classifier::DecisionStumpClassifier;
