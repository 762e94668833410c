//! Provides [`SmoteBoost`] by Chawla, Lazarevic, Hall, and Bowyer, 2003.
use rand::prelude::*;

use crate::{
    AdaBoostStep,
    Algorithm,
    Booster,
    BoostOutcome,
    BoostStep,
    BoostingParams,
    Sample,
    Smote,
    WeightedSample,

    common::checker,
    constants::*,
    error::{Result, SmoteBoostError},
};

use super::{
    EnsembleMember,
    EnsembleSlot,
    RoundReport,
    SmoteBoostClassifier,
    SmoteBoostParams,
};

use std::time::Instant;


/// Defines `SmoteBoost`.
///
/// `SmoteBoost` oversamples the minority class with [`Smote`]
/// at every boosting round and hands the grown sample to a [`Booster`].
///
/// In round `t = 0, 1, ..., n_estimators - 1`,
/// 1. [`Smote`] is fitted on the minority rows of the *current* sample
///    (original rows plus all synthetic rows so far)
///    and generates `n_samples` synthetic rows.
/// 2. Each synthetic row gets the weight `1 / N`,
///    where `N` is the number of rows before this round's augmentation.
///    The rows are appended and all weights are L1-normalized.
/// 3. The booster trains a hypothesis and returns new weights.
///    Training stops if the booster returns [`BoostOutcome::Stop`],
///    if the hypothesis has zero error,
///    or if the new weights sum to a non-positive value.
///
/// Rows are never shuffled: the original rows come first,
/// then the synthetic batches in generation order.
/// A single random stream, seeded by `random_state`,
/// is shared by [`Smote`] and the booster.
///
/// # Example
/// ```no_run
/// use smoteboost::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut smoteboost = SmoteBoost::init(DecisionStump::init())
///     .n_samples(100)
///     .n_estimators(50)
///     .k_neighbors(5)
///     .learning_rate(1.0)
///     .random_state(1234)
///     .algorithm(Algorithm::SammeR);
///
/// let f = smoteboost.fit(&sample, None, None).unwrap();
/// let predictions = f.predict_all(&sample);
///
/// println!("minority class: {}", f.minority_target());
/// println!("trained rounds: {}", f.n_trained());
/// ```
pub struct SmoteBoost<B> {
    // Performs the weighted boosting step.
    booster: B,

    // Synthetic rows generated per round.
    n_samples: usize,

    // Maximum number of rounds.
    n_estimators: usize,

    // Neighbor count used by `Smote`.
    k_neighbors: usize,

    // Scale applied to the learner weights.
    learning_rate: f64,

    // Seed of the random stream.
    random_state: Option<u64>,
}


impl<W> SmoteBoost<AdaBoostStep<W>> {
    /// Initialize `SmoteBoost` driving [`AdaBoostStep`]
    /// with the given weak learner.
    pub fn init(weak_learner: W) -> Self {
        Self::with_booster(AdaBoostStep::init(weak_learner))
    }


    /// Initialize `SmoteBoost` from a parameter record.
    pub fn from_params(weak_learner: W, params: &SmoteBoostParams) -> Self {
        Self::init(weak_learner)
            .set_params(params)
            .algorithm(params.algorithm)
    }


    /// Set the weight update rule of [`AdaBoostStep`].
    /// Default is [`Algorithm::SammeR`].
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.booster = self.booster.algorithm(algorithm);
        self
    }


    /// Returns the current parameters as a record.
    pub fn params(&self) -> SmoteBoostParams {
        SmoteBoostParams {
            n_samples: self.n_samples,
            n_estimators: self.n_estimators,
            k_neighbors: self.k_neighbors,
            learning_rate: self.learning_rate,
            random_state: self.random_state,
            algorithm: self.booster.current_algorithm(),
        }
    }
}


impl<B> SmoteBoost<B> {
    /// Initialize `SmoteBoost` with an arbitrary [`Booster`].
    /// Parameters take their default values;
    /// see [`SmoteBoostParams`].
    pub fn with_booster(booster: B) -> Self {
        Self {
            booster,
            n_samples: DEFAULT_N_SAMPLES,
            n_estimators: DEFAULT_N_ESTIMATORS,
            k_neighbors: DEFAULT_K_NEIGHBORS,
            learning_rate: DEFAULT_LEARNING_RATE,
            random_state: None,
        }
    }


    /// Copies every parameter of `params` except `algorithm`,
    /// which only concerns [`AdaBoostStep`].
    pub fn set_params(self, params: &SmoteBoostParams) -> Self {
        let smoteboost = self.n_samples(params.n_samples)
            .n_estimators(params.n_estimators)
            .k_neighbors(params.k_neighbors)
            .learning_rate(params.learning_rate);
        match params.random_state {
            Some(seed) => smoteboost.random_state(seed),
            None => Self { random_state: None, ..smoteboost },
        }
    }


    /// Set the number of synthetic rows generated per round.
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }


    /// Set the maximum number of rounds.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the neighbor count used by [`Smote`].
    pub fn k_neighbors(mut self, k_neighbors: usize) -> Self {
        self.k_neighbors = k_neighbors;
        self
    }


    /// Set the learning rate. Checked by `fit`: must be positive.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the seed of the random stream.
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }


    /// Returns the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Returns the parameters of `SmoteBoost` as `String`.
    pub fn info(&self) -> Vec<(&str, String)> {
        let seed = self.random_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "None".to_string());
        vec![
            ("Synthetic / round", self.n_samples.to_string()),
            ("Max. rounds", self.n_estimators.to_string()),
            ("Neighbors", self.k_neighbors.to_string()),
            ("Learning rate", self.learning_rate.to_string()),
            ("Random state", seed),
        ]
    }


    /// Checks the parameters and the inputs of `fit`.
    /// Returns the normalized initial weights and the minority label.
    fn validate(
        &self,
        sample: &Sample,
        sample_weight: Option<&[f64]>,
        minority_target: Option<i64>,
    ) -> Result<(Vec<f64>, i64)>
    {
        checker::learning_rate(self.learning_rate)?;
        checker::positive_count("n_estimators", self.n_estimators)?;
        checker::positive_count("k_neighbors", self.k_neighbors)?;

        let n_sample = sample.shape().0;
        if n_sample == 0 {
            return Err(SmoteBoostError::EmptySample);
        }

        let weights = match sample_weight {
            Some(weights) => checker::initial_weights(weights, n_sample)?,
            None => vec![1.0 / n_sample as f64; n_sample],
        };

        let minority_target = match minority_target {
            Some(y) if sample.target().contains(&y) => y,
            Some(y) => return Err(SmoteBoostError::UnknownLabel(y)),
            None => sample.minority_label()
                .ok_or(SmoteBoostError::EmptySample)?,
        };

        Ok((weights, minority_target))
    }
}


impl<B> SmoteBoost<B>
    where B: Booster,
{
    /// Runs SMOTEBoost on `sample`.
    ///
    /// - `sample_weight`: initial weights, rescaled to sum to `1`.
    ///   `None` means uniform weights.
    /// - `minority_target`: the label to oversample.
    ///   `None` means the least frequent label of `sample`.
    ///
    /// Any error discards the whole fit.
    /// A booster that returns a negative weight
    /// fails the fit with [`SmoteBoostError::InvalidWeights`].
    pub fn fit(
        &mut self,
        sample: &Sample,
        sample_weight: Option<&[f64]>,
        minority_target: Option<i64>,
    ) -> Result<SmoteBoostClassifier<B::Hypothesis>>
    {
        self.fit_observed(sample, sample_weight, minority_target, |_| {})
    }


    /// Same as [`SmoteBoost::fit`],
    /// but calls `observer` after every trained round.
    pub fn fit_observed<O>(
        &mut self,
        sample: &Sample,
        sample_weight: Option<&[f64]>,
        minority_target: Option<i64>,
        mut observer: O,
    ) -> Result<SmoteBoostClassifier<B::Hypothesis>>
        where O: FnMut(&RoundReport),
    {
        let (weights, minority_target) = self.validate(
            sample, sample_weight, minority_target
        )?;

        let params = BoostingParams {
            n_estimators: self.n_estimators,
            learning_rate: self.learning_rate,
        };
        self.booster.preprocess(&params)?;

        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // The sample grows by `n_samples` rows per round.
        let capacity = self.n_estimators
            .saturating_mul(self.n_samples)
            .saturating_add(sample.shape().0);
        let mut data = WeightedSample::with_capacity(sample, weights, capacity)?;

        let mut smote = Smote::new(self.k_neighbors);
        let mut slots = (0..self.n_estimators)
            .map(|_| EnsembleSlot::Untrained)
            .collect::<Vec<_>>();
        let mut reports = Vec::with_capacity(self.n_estimators);

        let mut time_acc = 0;
        for iteration in 0..self.n_estimators {
            let now = Instant::now();

            // SMOTE step.
            let minority = data.sample().rows_with_label(minority_target);
            smote.fit(minority)?;
            let synthetic = smote.sample_with(self.n_samples, &mut rng)?;
            let n_minority = smote.points().len() + synthetic.len();

            // Synthetic weights are based on the current number of rows.
            let weight = 1.0 / data.len() as f64;
            data.extend(synthetic, minority_target, weight)?;
            data.normalize();
            debug_assert!(checker::is_distribution(data.weights()));

            // Boosting step.
            let outcome = self.booster.step(
                iteration, data.sample(), data.weights(), &mut rng
            )?;

            let BoostStep { weights, estimator_weight, error, hypothesis } =
                match outcome {
                    BoostOutcome::Stop => break,
                    BoostOutcome::Step(step) => step,
                };
            checker::booster_weights(&weights, data.len())?;

            slots[iteration] = EnsembleSlot::Trained(EnsembleMember {
                hypothesis,
                weight: estimator_weight,
                error,
            });

            let weight_sum = weights.iter().sum::<f64>();

            time_acc += now.elapsed().as_millis();
            let report = RoundReport {
                iteration,
                n_rows: data.len(),
                n_minority,
                estimator_weight,
                error,
                weight_sum,
                time_ms: time_acc,
            };
            observer(&report);
            reports.push(report);

            // Perfect fit.
            if error == 0.0 { break; }

            // The weights cannot be normalized.
            if weight_sum <= 0.0 || !weight_sum.is_finite() { break; }

            if iteration + 1 < self.n_estimators {
                data.replace_weights(weights)?;
                data.normalize();
            }
        }

        Ok(SmoteBoostClassifier {
            slots,
            minority_target,
            classes: sample.unique_target(),
            reports,
        })
    }
}
