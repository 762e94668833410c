//! Defines the error type shared by every fallible operation in this crate.

use thiserror::Error;


/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, SmoteBoostError>;


/// The errors raised while reading data, fitting the sampler,
/// or running the boosting loop.
///
/// Every variant is fatal for the call that raised it.
/// Early termination of the boosting loop
/// (stop signal, zero error, non-positive weight sum)
/// is **not** an error and never shows up here.
#[derive(Error, Debug)]
pub enum SmoteBoostError {
    /// A configuration value is out of its domain,
    /// e.g., a non-positive learning rate.
    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: String,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The initial sample weights cannot be normalized.
    #[error("Invalid sample weights: {0}")]
    InvalidWeights(String),

    /// The minority subset is too small for the neighbor count.
    #[error(
        "Insufficient minority samples: \
        expected at least {required}, got {found}"
    )]
    InsufficientSamples {
        /// `k_neighbors + 1`.
        required: usize,
        /// Number of minority rows actually present.
        found: usize,
    },

    /// The training sample has no rows or no features.
    #[error("The sample is empty")]
    EmptySample,

    /// Feature vectors of different lengths were mixed.
    #[error("Dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// The dimension fixed by the first row.
        expected: usize,
        /// The offending length.
        found: usize,
    },

    /// The requested minority label does not occur in the target.
    #[error("Label {0} does not occur in the target")]
    UnknownLabel(i64),

    /// A method that needs a fitted model was called before `fit`.
    #[error("Model not fitted")]
    NotFitted,

    /// Failed to read a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value in a data file is not numeric.
    #[error("Cannot parse `{value}` at line {line}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// The raw token.
        value: String,
    },

    /// Failed to convert a polars frame.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Failed to (de)serialize parameters.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


impl SmoteBoostError {
    pub(crate) fn invalid_parameter<V>(name: &str, value: V, reason: &str)
        -> Self
        where V: ToString,
    {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
