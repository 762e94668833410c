#![warn(missing_docs)]

//!
//! A crate that provides SMOTEBoost,
//! a boosting algorithm for imbalanced classification.
//!
//! At every round, SMOTEBoost generates synthetic examples
//! of the minority class
//! by interpolating between a minority example and
//! one of its nearest minority neighbors ([`Smote`]).
//! The synthetic examples are appended to the training sample,
//! and a weighted boosting step ([`Booster`]) trains
//! the next weak hypothesis on the grown sample.
//!
//! This crate includes
//!
//! - [`Smote`], the Synthetic Minority Over-sampling Technique
//!     over a pluggable [`NearestNeighbors`] index.
//! - [`SmoteBoost`], the boosting loop.
//!     Any [`Booster`] can be plugged in;
//!     [`AdaBoostStep`] (SAMME / SAMME.R) is shipped with the crate.
//! - [`DecisionStump`], a weighted Gini stump used as the weak learner.
//! - [`Logger`], which runs [`SmoteBoost`] and
//!     writes the per-round statistics to a CSV file.
//!
//! # Example
//! ```no_run
//! use smoteboost::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("/path/to/data.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! let mut smoteboost = SmoteBoost::init(DecisionStump::init())
//!     .n_samples(50)
//!     .n_estimators(20)
//!     .random_state(7);
//!
//! let f = smoteboost.fit(&sample, None, None).unwrap();
//! let predictions = f.predict_all(&sample);
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod common;
pub mod neighbors;
pub mod smote;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod smoteboost;
pub mod research;

pub mod prelude;


pub use error::{Result, SmoteBoostError};

pub use sample::{Sample, SampleReader, WeightedSample};

pub use neighbors::{BruteForce, NearestNeighbors};

pub use smote::Smote;

pub use hypothesis::Classifier;

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    DecisionStumpClassifier,
};

pub use booster::{
    Booster,
    BoostOutcome,
    BoostStep,
    BoostingParams,
    AdaBoostStep,
    Algorithm,
    BoostedLearner,
};

pub use smoteboost::{
    SmoteBoost,
    SmoteBoostClassifier,
    SmoteBoostParams,
    EnsembleMember,
    EnsembleSlot,
    RoundReport,
};

pub use research::Logger;
