use crate::{Sample, common::utils};


/// A trait that defines the behavor of classifier.
/// You only need to implement `classes` and `confidence` methods.
pub trait Classifier {
    /// Returns the labels this classifier distinguishes,
    /// in ascending order.
    fn classes(&self) -> &[i64];


    /// Computes the confidence of each class for `x`.
    /// The `k`-th entry corresponds to `self.classes()[k]`;
    /// a larger value means a stronger vote.
    fn confidence(&self, x: &[f64]) -> Vec<f64>;


    /// Predicts the index (in `self.classes()`) of the label of `x`.
    fn predict_index(&self, x: &[f64]) -> usize {
        utils::argmax(&self.confidence(x))
    }


    /// Predicts the label of `x`.
    fn predict(&self, x: &[f64]) -> i64 {
        self.classes()[self.predict_index(x)]
    }


    /// Predicts the labels of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        sample.rows()
            .iter()
            .map(|x| self.predict(x))
            .collect::<Vec<_>>()
    }
}
