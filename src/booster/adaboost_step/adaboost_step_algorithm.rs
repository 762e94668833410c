//! Provides [`AdaBoostStep`] by Zhu, Zou, Rosset, and Hastie, 2009.
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::{
    Booster,
    BoostOutcome,
    BoostStep,
    BoostingParams,
    Classifier,
    Sample,
    WeakLearner,

    constants::{DEFAULT_LEARNING_RATE, DEFAULT_N_ESTIMATORS},
    error::{Result, SmoteBoostError},
};

use super::BoostedLearner;

use std::fmt;


/// The weight update rule of [`AdaBoostStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Discrete SAMME. Uses the predicted labels only.
    #[serde(rename = "SAMME")]
    Samme,
    /// Real SAMME.R. Uses the predicted class probabilities.
    #[default]
    #[serde(rename = "SAMME.R")]
    SammeR,
}


impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Samme => "SAMME",
            Algorithm::SammeR => "SAMME.R",
        };
        write!(f, "{name}")
    }
}


/// Defines `AdaBoostStep`,
/// the multi-class AdaBoost update applied once per round.
///
/// Each call of [`Booster::step`] trains one weak hypothesis
/// on the weighted sample and returns the re-weighted distribution.
///
/// - [`Algorithm::Samme`]:
///   the learner weight is
///   `η (ln((1 - ε) / ε) + ln(K - 1))`
///   and misclassified rows are multiplied by its exponential.
///   If `ε >= 1 - 1/K`, the step returns [`BoostOutcome::Stop`].
/// - [`Algorithm::SammeR`]:
///   every row `i` is multiplied by
///   `exp(-η (K - 1) / K * Σ_k c_ik ln p_k(x_i))`,
///   where `c_ik = 1` for the true class and `-1 / (K - 1)` otherwise.
///   The learner weight is always `1`.
///
/// In both cases a hypothesis with zero weighted error is returned
/// with weight `1`, error `0`, and the weights left untouched.
/// The weights are not updated in the final round.
///
/// # Example
/// ```no_run
/// use smoteboost::prelude::*;
///
/// let booster = AdaBoostStep::init(DecisionStump::init())
///     .algorithm(Algorithm::Samme);
/// let smoteboost = SmoteBoost::with_booster(booster)
///     .n_estimators(10);
/// ```
pub struct AdaBoostStep<W> {
    // Weak learner that trains each hypothesis.
    weak_learner: W,

    // Weight update rule.
    algorithm: Algorithm,

    // Parameters set by `Booster::preprocess`.
    params: BoostingParams,

    // Labels in ascending order, fixed at the first round.
    classes: Vec<i64>,
}


impl<W> AdaBoostStep<W> {
    /// Initialize the `AdaBoostStep` with the given weak learner.
    /// The default rule is [`Algorithm::SammeR`].
    pub fn init(weak_learner: W) -> Self {
        Self {
            weak_learner,
            algorithm: Algorithm::default(),
            params: BoostingParams {
                n_estimators: DEFAULT_N_ESTIMATORS,
                learning_rate: DEFAULT_LEARNING_RATE,
            },
            classes: Vec::new(),
        }
    }


    /// Set the weight update rule.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }


    /// Returns the weight update rule.
    pub fn current_algorithm(&self) -> Algorithm {
        self.algorithm
    }


    /// Returns the weak learner.
    pub fn weak_learner(&self) -> &W {
        &self.weak_learner
    }


    #[inline]
    fn is_last_round(&self, iteration: usize) -> bool {
        iteration + 1 == self.params.n_estimators
    }


    /// Weighted fraction of rows whose label differs from `predictions`.
    #[inline]
    fn weighted_error(
        target: &[i64],
        predictions: &[i64],
        dist: &[f64],
    ) -> f64
    {
        let total = dist.iter().sum::<f64>();
        let wrong = target.iter()
            .zip(predictions)
            .zip(dist)
            .filter(|((y, p), _)| y != p)
            .map(|(_, d)| d)
            .sum::<f64>();
        wrong / total
    }
}


impl<W, F> AdaBoostStep<W>
    where W: WeakLearner<Hypothesis = F>,
          F: Classifier,
{
    fn boost_discrete(
        &self,
        iteration: usize,
        sample: &Sample,
        dist: &[f64],
        h: F,
    ) -> BoostOutcome<BoostedLearner<F>>
    {
        let target = sample.target();
        let predictions = h.predict_all(sample);
        let error = Self::weighted_error(target, &predictions, dist);

        let hypothesis = BoostedLearner { learner: h, algorithm: Algorithm::Samme };

        if error <= 0.0 {
            return BoostOutcome::Step(BoostStep {
                weights: dist.to_vec(),
                estimator_weight: 1.0,
                error: 0.0,
                hypothesis,
            });
        }

        let n_class = self.classes.len() as f64;
        if error >= 1.0 - 1.0 / n_class {
            return BoostOutcome::Stop;
        }

        let alpha = self.params.learning_rate
            * (((1.0 - error) / error).ln() + (n_class - 1.0).ln());

        let mut weights = dist.to_vec();
        if !self.is_last_round(iteration) {
            let factor = alpha.exp();
            weights.iter_mut()
                .zip(target.iter().zip(&predictions))
                .filter(|(_, (y, p))| y != p)
                .for_each(|(w, _)| {
                    if *w > 0.0 || alpha < 0.0 { *w *= factor; }
                });
        }

        BoostOutcome::Step(BoostStep {
            weights,
            estimator_weight: alpha,
            error,
            hypothesis,
        })
    }


    fn boost_real(
        &self,
        iteration: usize,
        sample: &Sample,
        dist: &[f64],
        h: F,
    ) -> BoostOutcome<BoostedLearner<F>>
    {
        let target = sample.target();
        let proba = sample.rows()
            .iter()
            .map(|x| h.confidence(x))
            .collect::<Vec<_>>();
        let predictions = sample.rows()
            .iter()
            .map(|x| h.predict(x))
            .collect::<Vec<_>>();
        let error = Self::weighted_error(target, &predictions, dist);

        let hypothesis = BoostedLearner { learner: h, algorithm: Algorithm::SammeR };

        if error <= 0.0 {
            return BoostOutcome::Step(BoostStep {
                weights: dist.to_vec(),
                estimator_weight: 1.0,
                error: 0.0,
                hypothesis,
            });
        }

        let n_class = self.classes.len() as f64;
        let coding = -1.0 / (n_class - 1.0);
        let scale = -self.params.learning_rate * (n_class - 1.0) / n_class;

        let mut weights = dist.to_vec();
        if !self.is_last_round(iteration) {
            weights.iter_mut()
                .zip(target.iter().zip(proba))
                .for_each(|(w, (y, p))| {
                    let inner = self.classes.iter()
                        .zip(p)
                        .map(|(c, pk)| {
                            let code = if c == y { 1.0 } else { coding };
                            code * pk.max(f64::EPSILON).ln()
                        })
                        .sum::<f64>();
                    let a = scale * inner;
                    if *w > 0.0 || a < 0.0 { *w *= a.exp(); }
                });
        }

        BoostOutcome::Step(BoostStep {
            weights,
            estimator_weight: 1.0,
            error,
            hypothesis,
        })
    }
}


impl<W, F> Booster for AdaBoostStep<W>
    where W: WeakLearner<Hypothesis = F>,
          F: Classifier,
{
    type Hypothesis = BoostedLearner<F>;


    fn name(&self) -> &str {
        match self.algorithm {
            Algorithm::Samme => "AdaBoost (SAMME)",
            Algorithm::SammeR => "AdaBoost (SAMME.R)",
        }
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = vec![
            ("Weak Learner", self.weak_learner.name().to_string()),
            ("Learning rate", format!("{}", self.params.learning_rate)),
            ("Max. rounds", format!("{}", self.params.n_estimators)),
        ];
        Some(info)
    }


    fn preprocess(&mut self, params: &BoostingParams) -> Result<()> {
        self.params = *params;
        self.classes = Vec::new();
        Ok(())
    }


    fn step(
        &mut self,
        iteration: usize,
        sample: &Sample,
        dist: &[f64],
        _rng: &mut StdRng,
    ) -> Result<BoostOutcome<Self::Hypothesis>>
    {
        if self.classes.is_empty() {
            let classes = sample.unique_target();
            if classes.len() < 2 {
                return Err(SmoteBoostError::invalid_parameter(
                    "target",
                    format!("{classes:?}"),
                    "at least two classes are required",
                ));
            }
            self.classes = classes;
        }

        let h = self.weak_learner.produce(sample, dist, &self.classes);

        let outcome = match self.algorithm {
            Algorithm::Samme => self.boost_discrete(iteration, sample, dist, h),
            Algorithm::SammeR => self.boost_real(iteration, sample, dist, h),
        };
        Ok(outcome)
    }
}
