//! Defines `AdaBoostStep`, the SAMME / SAMME.R boosting step.
//! This struct is based on the paper:
//! [Multi-class AdaBoost](https://doi.org/10.4310/SII.2009.v2.n3.a8)
//! by Ji Zhu, Hui Zou, Saharon Rosset, and Trevor Hastie.
pub mod adaboost_step_algorithm;
pub mod boosted_learner;

pub use adaboost_step_algorithm::{AdaBoostStep, Algorithm};
pub use boosted_learner::BoostedLearner;
