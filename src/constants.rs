//! Default parameters and numeric tolerances.

/// Synthetic samples generated per boosting round.
pub const DEFAULT_N_SAMPLES:     usize = 100;
/// Maximum number of boosting rounds.
pub const DEFAULT_N_ESTIMATORS:  usize = 50;
/// Neighbor count used by SMOTE.
pub const DEFAULT_K_NEIGHBORS:   usize = 5;
/// Scale applied to the learner weights.
pub const DEFAULT_LEARNING_RATE: f64   = 1.0;

/// Tolerance used when checking that a distribution sums to `1`.
pub const SIMPLEX_TOLERANCE:     f64   = 1e-9;
/// Tolerance used for the remaining float comparisons.
pub const NUMERIC_TOLERANCE:     f64   = 1e-12;

/// Placeholder weight of an untrained ensemble slot.
pub const UNTRAINED_WEIGHT:      f64   = 0.0;
/// Placeholder error of an untrained ensemble slot.
pub const UNTRAINED_ERROR:       f64   = 1.0;
