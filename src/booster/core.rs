//! Provides `Booster` trait.

use rand::rngs::StdRng;

use crate::Sample;
use crate::error::Result;


/// Parameters [`SmoteBoost`](crate::SmoteBoost) hands to its booster
/// before the first round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostingParams {
    /// Maximum number of rounds.
    pub n_estimators: usize,
    /// Scale applied to the learner weights. Always positive.
    pub learning_rate: f64,
}


/// The result of a single boosting step.
#[derive(Debug, Clone)]
pub struct BoostStep<H> {
    /// Updated (unnormalized) weights, one per row of the sample.
    /// Must be non-negative.
    pub weights: Vec<f64>,
    /// Weight of the new hypothesis in the ensemble.
    pub estimator_weight: f64,
    /// Weighted training error of the new hypothesis.
    pub error: f64,
    /// The trained hypothesis.
    pub hypothesis: H,
}


/// What a [`Booster`] returns for a round.
#[derive(Debug, Clone)]
pub enum BoostOutcome<H> {
    /// The booster cannot make progress.
    /// The caller stops training and leaves this round untrained.
    Stop,
    /// A hypothesis was trained.
    Step(BoostStep<H>),
}


/// The trait [`Booster`] defines a single weighted boosting step.
///
/// [`SmoteBoost`](crate::SmoteBoost) owns the training sample
/// and the weight vector; a booster only sees them for the duration
/// of a call to [`Booster::step`].
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::step`]
///
/// # Provided Methods
/// - [`Booster::info`]
/// - [`Booster::preprocess`]
pub trait Booster {
    /// The hypothesis produced by each step.
    type Hypothesis;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Pre-processing for `self`.
    /// Called once per fit, before the first step.
    fn preprocess(&mut self, _params: &BoostingParams) -> Result<()> {
        Ok(())
    }


    /// Boosting step of round `iteration` (0-indexed).
    ///
    /// `dist` has one entry per row of `sample` and sums to `1`.
    /// `rng` is the random stream shared with the sampler.
    fn step(
        &mut self,
        iteration: usize,
        sample: &Sample,
        dist: &[f64],
        rng: &mut StdRng,
    ) -> Result<BoostOutcome<Self::Hypothesis>>;
}
