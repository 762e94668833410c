use crate::Classifier;


/// The depth-one tree produced by [`DecisionStump`](super::DecisionStump).
///
/// A row `x` goes to the left leaf if `x[feature] <= threshold`,
/// and to the right leaf otherwise.
/// Each leaf holds the weighted class frequencies of the training rows
/// that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionStumpClassifier {
    pub(super) feature: usize,
    pub(super) threshold: f64,
    pub(super) left: Vec<f64>,
    pub(super) right: Vec<f64>,
    pub(super) classes: Vec<i64>,
}


impl DecisionStumpClassifier {
    /// Index of the feature this stump splits on.
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// The splitting threshold.
    /// `f64::INFINITY` means the stump has a single leaf.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Returns the class probabilities for `x`.
    pub fn predict_proba(&self, x: &[f64]) -> &[f64] {
        if x[self.feature] <= self.threshold {
            &self.left[..]
        } else {
            &self.right[..]
        }
    }
}


impl Classifier for DecisionStumpClassifier {
    fn classes(&self) -> &[i64] {
        &self.classes[..]
    }


    fn confidence(&self, x: &[f64]) -> Vec<f64> {
        self.predict_proba(x).to_vec()
    }
}
