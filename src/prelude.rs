//! Exports the SMOTEBoost algorithm, its components, and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,
    BoostOutcome,
    BoostStep,
    BoostingParams,

    // Built-in boosting step
    AdaBoostStep,
    Algorithm,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DecisionStump,
    DecisionStumpClassifier,
};


pub use crate::hypothesis::Classifier;


pub use crate::neighbors::{
    NearestNeighbors,
    BruteForce,
};


pub use crate::smote::Smote;


pub use crate::smoteboost::{
    SmoteBoost,
    SmoteBoostClassifier,
    SmoteBoostParams,
    EnsembleSlot,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::research::Logger;


pub use crate::error::SmoteBoostError;
