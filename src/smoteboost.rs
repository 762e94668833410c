//! Defines `SmoteBoost`.
//! This struct is based on the paper:
//! [SMOTEBoost: Improving Prediction of the Minority Class in
//! Boosting](https://doi.org/10.1007/978-3-540-39804-2_12)
//! by N. V. Chawla, A. Lazarevic, L. O. Hall, and K. W. Bowyer.
pub mod smoteboost_algorithm;
pub mod ensemble;
pub mod params;

pub use smoteboost_algorithm::SmoteBoost;
pub use ensemble::{
    EnsembleMember,
    EnsembleSlot,
    RoundReport,
    SmoteBoostClassifier,
};
pub use params::SmoteBoostParams;
