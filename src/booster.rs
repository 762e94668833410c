//! Provides the [`Booster`] trait and the built-in boosting step.

mod core;

mod adaboost_step;


/// Booster trait
pub use self::core::{
    Booster,
    BoostOutcome,
    BoostStep,
    BoostingParams,
};

pub use self::adaboost_step::{
    AdaBoostStep,
    Algorithm,
    BoostedLearner,
};
