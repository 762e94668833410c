//! Provides the decision stump class.
use crate::{Sample, WeakLearner};
use crate::constants::NUMERIC_TOLERANCE;

use super::DecisionStumpClassifier;


/// The struct `DecisionStump` generates a [`DecisionStumpClassifier`]
/// for each call of `WeakLearner::produce`.
///
/// The split minimizes the weighted Gini impurity of the two leaves
/// over every feature and every midpoint
/// between consecutive distinct values.
/// If no split lowers the impurity of the root,
/// the stump has a single leaf.
///
/// # Example
/// ```no_run
/// use smoteboost::prelude::*;
///
/// let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
/// let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]).unwrap();
/// let dist = vec![0.25; 4];
///
/// let stump = DecisionStump::init();
/// let h = stump.produce(&sample, &dist, &[0, 1]);
/// assert_eq!(h.predict_all(&sample), vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionStump;


impl DecisionStump {
    /// Initializes an instance of `DecisionStump`.
    pub fn init() -> Self {
        Self
    }
}


/// The best split found so far.
struct Split {
    feature: usize,
    threshold: f64,
    left: Vec<f64>,
    impurity: f64,
}


impl WeakLearner for DecisionStump {
    type Hypothesis = DecisionStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("Criterion", "Gini".to_string())])
    }


    fn produce(&self, sample: &Sample, dist: &[f64], classes: &[i64])
        -> Self::Hypothesis
    {
        let (n_sample, n_feature) = sample.shape();
        let n_class = classes.len();

        // Index of each row's label in `classes`.
        // Rows whose label is not listed carry no weight.
        let class_of = sample.target()
            .iter()
            .map(|y| classes.binary_search(y).ok())
            .collect::<Vec<_>>();

        let mut total = vec![0f64; n_class];
        class_of.iter()
            .zip(dist)
            .for_each(|(k, d)| if let Some(k) = k { total[*k] += d; });

        let mut best = Split {
            feature: 0,
            threshold: f64::INFINITY,
            left: total.clone(),
            impurity: impurity(&total),
        };

        let mut indices = (0..n_sample).collect::<Vec<usize>>();
        for j in 0..n_feature {
            indices.sort_by(|&a, &b| {
                sample.row(a)[j].total_cmp(&sample.row(b)[j])
            });

            let mut left = vec![0f64; n_class];
            let mut iter = indices.iter().peekable();
            while let Some(&i) = iter.next() {
                if let Some(k) = class_of[i] {
                    left[k] += dist[i];
                }

                let Some(&&i_next) = iter.peek() else { break; };
                let x = sample.row(i)[j];
                let next = sample.row(i_next)[j];
                if x == next { continue; }

                let right = total.iter()
                    .zip(&left)
                    .map(|(t, l)| t - l)
                    .collect::<Vec<_>>();
                let imp = impurity(&left) + impurity(&right);

                if imp + NUMERIC_TOLERANCE < best.impurity {
                    let mut threshold = (x + next) / 2.0;
                    if threshold >= next { threshold = x; }

                    best = Split {
                        feature: j,
                        threshold,
                        left: left.clone(),
                        impurity: imp,
                    };
                }
            }
        }

        let right = total.iter()
            .zip(&best.left)
            .map(|(t, l)| t - l)
            .collect::<Vec<_>>();

        let root = frequencies(&total, None);
        let left = frequencies(&best.left, Some(&root));
        let right = frequencies(&right, Some(&root));

        DecisionStumpClassifier {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
            classes: classes.to_vec(),
        }
    }
}


/// Weighted Gini impurity `W * (1 - Σ (c_k / W)^2)` of a node.
#[inline(always)]
fn impurity(counts: &[f64]) -> f64 {
    let w = counts.iter().sum::<f64>();
    if w <= 0.0 { return 0.0; }

    w - counts.iter().map(|c| c * c).sum::<f64>() / w
}


/// Normalizes the class weights of a leaf.
/// An empty leaf falls back to `parent`, or to the uniform distribution.
#[inline(always)]
fn frequencies(counts: &[f64], parent: Option<&[f64]>) -> Vec<f64> {
    let w = counts.iter().sum::<f64>();
    if w > 0.0 {
        return counts.iter().map(|c| c / w).collect();
    }
    match parent {
        Some(parent) => parent.to_vec(),
        None => {
            let n_class = counts.len() as f64;
            vec![1.0 / n_class; counts.len()]
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;

    #[test]
    fn splits_on_the_informative_feature() {
        let rows = vec![
            vec![5.0, 0.0],
            vec![1.0, 1.0],
            vec![4.0, 2.0],
            vec![2.0, 3.0],
        ];
        let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]).unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::init().produce(&sample, &dist, &[0, 1]);
        assert_eq!(h.feature(), 1);
        assert_eq!(h.threshold(), 1.5);
        assert_eq!(h.predict_all(&sample), vec![0, 0, 1, 1]);
    }

    #[test]
    fn weights_move_the_split() {
        // Labels: 0 0 1 0 1 on a line.
        // With uniform weights the best cut isolates the last point
        // or the middle; a heavy weight on row 3 forces the cut
        // at 3.5 so that row 3 is classified correctly.
        let rows = (0..5).map(|i| vec![i as f64]).collect::<Vec<_>>();
        let sample = Sample::from_rows(rows, vec![0, 0, 1, 0, 1]).unwrap();
        let dist = vec![0.01, 0.01, 0.01, 0.96, 0.01];

        let h = DecisionStump::init().produce(&sample, &dist, &[0, 1]);
        assert_eq!(h.threshold(), 3.5);
        assert_eq!(h.predict(&[3.0]), 0);
        assert_eq!(h.predict(&[4.0]), 1);
    }

    #[test]
    fn constant_feature_gives_a_single_leaf() {
        let rows = vec![vec![1.0]; 4];
        let sample = Sample::from_rows(rows, vec![0, 1, 1, 1]).unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::init().produce(&sample, &dist, &[0, 1]);
        assert_eq!(h.threshold(), f64::INFINITY);
        assert_eq!(h.predict_proba(&[1.0]), &[0.25, 0.75]);
        assert_eq!(h.predict(&[-100.0]), 1);
    }
}
