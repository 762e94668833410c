//! The ensemble member produced by `AdaBoostStep`.
use crate::Classifier;

use super::Algorithm;


/// A weak hypothesis together with the rule that turns
/// its output into a vote of the ensemble.
///
/// - [`Algorithm::Samme`] votes `1` for the predicted class
///   and `-1 / (K - 1)` for the others.
/// - [`Algorithm::SammeR`] reads `confidence` as class probabilities `p`
///   and votes `(K - 1) * (ln p_k - mean_j ln p_j)`.
#[derive(Debug, Clone)]
pub struct BoostedLearner<F> {
    pub(super) learner: F,
    pub(super) algorithm: Algorithm,
}


impl<F> BoostedLearner<F> {
    /// Returns the wrapped weak hypothesis.
    pub fn learner(&self) -> &F {
        &self.learner
    }


    /// Returns the voting rule.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}


impl<F> Classifier for BoostedLearner<F>
    where F: Classifier,
{
    fn classes(&self) -> &[i64] {
        self.learner.classes()
    }


    fn confidence(&self, x: &[f64]) -> Vec<f64> {
        let n_class = self.classes().len() as f64;
        match self.algorithm {
            Algorithm::Samme => {
                let k = self.learner.predict_index(x);
                let others = -1.0 / (n_class - 1.0);
                (0..self.classes().len())
                    .map(|j| if j == k { 1.0 } else { others })
                    .collect()
            },
            Algorithm::SammeR => {
                let log_proba = self.learner.confidence(x)
                    .into_iter()
                    .map(|p| p.max(f64::EPSILON).ln())
                    .collect::<Vec<_>>();
                let mean = log_proba.iter().sum::<f64>() / n_class;
                log_proba.into_iter()
                    .map(|lp| (n_class - 1.0) * (lp - mean))
                    .collect()
            },
        }
    }
}
