//! Serializable parameters of `SmoteBoost`.
use serde::{Serialize, Deserialize};

use crate::{
    Algorithm,

    constants::*,
    error::Result,
};


/// The parameters of [`SmoteBoost`](crate::SmoteBoost)
/// as a plain, serializable record.
///
/// Missing fields take their default values, so
/// `{"n_estimators": 10}` is a valid JSON input.
///
/// ```text
/// n_samples:     DEFAULT_N_SAMPLES     == 100,
/// n_estimators:  DEFAULT_N_ESTIMATORS  == 50,
/// k_neighbors:   DEFAULT_K_NEIGHBORS   == 5,
/// learning_rate: DEFAULT_LEARNING_RATE == 1.0,
/// random_state:  None,
/// algorithm:     Algorithm::SammeR,
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoteBoostParams {
    /// Synthetic samples generated per round.
    pub n_samples: usize,
    /// Maximum number of rounds.
    pub n_estimators: usize,
    /// Neighbor count used by SMOTE.
    pub k_neighbors: usize,
    /// Scale applied to the learner weights.
    pub learning_rate: f64,
    /// Seed of the random stream. `None` seeds from the system entropy.
    pub random_state: Option<u64>,
    /// Weight update rule of the built-in booster.
    pub algorithm: Algorithm,
}


impl Default for SmoteBoostParams {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_N_SAMPLES,
            n_estimators: DEFAULT_N_ESTIMATORS,
            k_neighbors: DEFAULT_K_NEIGHBORS,
            learning_rate: DEFAULT_LEARNING_RATE,
            random_state: None,
            algorithm: Algorithm::default(),
        }
    }
}


impl SmoteBoostParams {
    /// Reads the parameters from a JSON string.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        let params = serde_json::from_str(json.as_ref())?;
        Ok(params)
    }


    /// Writes the parameters as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
