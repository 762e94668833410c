//! This file defines some functions that checks some pre-conditions
//! E.g., the domain of the parameters.

use crate::constants::SIMPLEX_TOLERANCE;
use crate::error::{Result, SmoteBoostError};


/// Check whether the learning rate is positive.
#[inline(always)]
pub(crate) fn learning_rate(eta: f64) -> Result<()> {
    if eta > 0.0 {
        Ok(())
    } else {
        Err(SmoteBoostError::invalid_parameter(
            "learning_rate", eta, "must be greater than zero"
        ))
    }
}


/// Check whether a count parameter is positive.
#[inline(always)]
pub(crate) fn positive_count(name: &str, count: usize) -> Result<()> {
    if count > 0 {
        Ok(())
    } else {
        Err(SmoteBoostError::invalid_parameter(
            name, count, "must be greater than zero"
        ))
    }
}


/// Validates the caller-supplied weights and returns them rescaled
/// to sum to `1`.
#[inline(always)]
pub(crate) fn initial_weights(weights: &[f64], n_sample: usize)
    -> Result<Vec<f64>>
{
    if weights.len() != n_sample {
        return Err(SmoteBoostError::DimensionMismatch {
            expected: n_sample,
            found: weights.len(),
        });
    }
    if let Some(w) = weights.iter().find(|w| **w < 0.0 || w.is_nan()) {
        return Err(SmoteBoostError::InvalidWeights(
            format!("weights must be non-negative, got {w}")
        ));
    }

    let sum = weights.iter().sum::<f64>();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(SmoteBoostError::InvalidWeights(format!(
            "attempting to fit with a non-positive \
            weighted number of samples (sum = {sum})"
        )));
    }

    Ok(weights.iter().map(|w| w / sum).collect())
}


/// Checks the weights returned by a booster.
/// Negative entries are rejected; a zero or non-finite total is left
/// to the caller, which stops training on it.
#[inline(always)]
pub(crate) fn booster_weights(weights: &[f64], n_sample: usize) -> Result<()> {
    if weights.len() != n_sample {
        return Err(SmoteBoostError::DimensionMismatch {
            expected: n_sample,
            found: weights.len(),
        });
    }
    if let Some((i, w)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
        return Err(SmoteBoostError::InvalidWeights(
            format!("the booster returned a negative weight {w} at row {i}")
        ));
    }
    Ok(())
}


/// Returns `true` if `dist` sums to `1` within [`SIMPLEX_TOLERANCE`].
#[inline(always)]
pub(crate) fn is_distribution(dist: &[f64]) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_rate_success_01() {
        assert!(learning_rate(1e-3).is_ok());
    }

    #[test]
    fn test_learning_rate_failure_01() {
        assert!(learning_rate(0.0).is_err());
        assert!(learning_rate(-1.0).is_err());
    }

    #[test]
    fn test_initial_weights_success_01() {
        let w = initial_weights(&[2.0, 6.0], 2).unwrap();
        assert_eq!(w, vec![0.25, 0.75]);
        assert!(is_distribution(&w));
    }

    #[test]
    fn test_initial_weights_failure_01() {
        let err = initial_weights(&[0.0, 0.0], 2).unwrap_err();
        assert!(matches!(err, SmoteBoostError::InvalidWeights(_)));
    }

    #[test]
    fn test_initial_weights_failure_02() {
        let err = initial_weights(&[1.0, -0.5], 2).unwrap_err();
        assert!(matches!(err, SmoteBoostError::InvalidWeights(_)));
    }

    #[test]
    fn test_booster_weights_01() {
        assert!(booster_weights(&[0.0, 0.5, f64::INFINITY], 3).is_ok());

        let err = booster_weights(&[0.2, -0.1], 2).unwrap_err();
        assert!(matches!(err, SmoteBoostError::InvalidWeights(_)));

        let err = booster_weights(&[0.2], 2).unwrap_err();
        assert!(matches!(err, SmoteBoostError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_initial_weights_failure_03() {
        let err = initial_weights(&[1.0], 2).unwrap_err();
        assert!(matches!(err, SmoteBoostError::DimensionMismatch { .. }));
    }
}
