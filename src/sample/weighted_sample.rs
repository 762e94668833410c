use super::sample_struct::Sample;
use crate::common::utils;
use crate::error::{Result, SmoteBoostError};


/// A [`Sample`] paired with one non-negative weight per row.
///
/// `WeightedSample` is the append-only training buffer of
/// [`SmoteBoost`](crate::SmoteBoost).
/// Rows and weights grow together, so `weights().len()` always equals
/// the number of rows.
#[derive(Debug, Clone)]
pub struct WeightedSample {
    sample: Sample,
    weights: Vec<f64>,
}


impl WeightedSample {
    /// Copies `sample` into a buffer able to hold `capacity` rows
    /// without reallocating.
    pub fn with_capacity(sample: &Sample, weights: Vec<f64>, capacity: usize)
        -> Result<Self>
    {
        let n_sample = sample.shape().0;
        if weights.len() != n_sample {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: n_sample,
                found: weights.len(),
            });
        }

        let mut sample = sample.clone();
        sample.reserve(capacity.saturating_sub(n_sample));

        let mut buffer = Vec::with_capacity(capacity.max(n_sample));
        buffer.extend(weights);

        Ok(Self { sample, weights: buffer })
    }


    /// Returns the underlying sample.
    pub fn sample(&self) -> &Sample {
        &self.sample
    }


    /// Returns the current weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.weights.len()
    }


    /// Returns `true` if the buffer holds no rows.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }


    /// Appends `rows` labeled `label`, each with weight `weight`.
    pub fn extend(&mut self, rows: Vec<Vec<f64>>, label: i64, weight: f64)
        -> Result<()>
    {
        let n_new = rows.len();
        self.sample.append(rows, label)?;
        self.weights.extend(std::iter::repeat(weight).take(n_new));
        Ok(())
    }


    /// L1-normalizes the weights in place.
    /// Returns the sum before normalization.
    pub fn normalize(&mut self) -> f64 {
        utils::normalize(&mut self.weights[..])
    }


    /// Replaces the weight vector.
    pub fn replace_weights(&mut self, weights: Vec<f64>) -> Result<()> {
        if weights.len() != self.weights.len() {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: self.weights.len(),
                found: weights.len(),
            });
        }
        self.weights = weights;
        Ok(())
    }
}
