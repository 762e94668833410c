//! Provides the [`WeakLearner`] trait.
use crate::Sample;


/// A trait that defines the behavior of a weak learner.
///
/// Given a training sample, a distribution over its rows,
/// and the list of labels,
/// a weak learner returns a hypothesis that is
/// (slightly) better than random guessing with respect to the distribution.
pub trait WeakLearner {
    /// The hypothesis type this weak learner produces.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produces a hypothesis from the weighted sample.
    /// `dist[i]` is the weight on the `i`-th row
    /// and `classes` are the labels in ascending order.
    fn produce(&self, sample: &Sample, dist: &[f64], classes: &[i64])
        -> Self::Hypothesis;
}
