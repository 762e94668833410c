//! The trained ensemble returned by `SmoteBoost::fit`.
use crate::{
    Classifier,

    constants::{UNTRAINED_WEIGHT, UNTRAINED_ERROR},
};


/// A hypothesis trained in some round, with its weight and error.
#[derive(Debug, Clone)]
pub struct EnsembleMember<H> {
    /// The trained hypothesis.
    pub hypothesis: H,
    /// Weight of the hypothesis in the ensemble.
    pub weight: f64,
    /// Weighted training error of the hypothesis.
    pub error: f64,
}


/// One slot of the ensemble, indexed by round.
///
/// Slots of rounds that never ran (after an early stop)
/// are [`EnsembleSlot::Untrained`].
/// They report weight `0` and error `1` through
/// [`EnsembleSlot::weight`] and [`EnsembleSlot::error`]
/// but never take part in a prediction.
#[derive(Debug, Clone)]
pub enum EnsembleSlot<H> {
    /// A hypothesis was trained in this round.
    Trained(EnsembleMember<H>),
    /// Training stopped before this round.
    Untrained,
}


impl<H> EnsembleSlot<H> {
    /// Returns `true` if a hypothesis was trained in this round.
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained(_))
    }


    /// Returns the member of this slot, if any.
    pub fn member(&self) -> Option<&EnsembleMember<H>> {
        match self {
            Self::Trained(member) => Some(member),
            Self::Untrained => None,
        }
    }


    /// Weight of the slot; `0` for an untrained one.
    pub fn weight(&self) -> f64 {
        self.member()
            .map(|m| m.weight)
            .unwrap_or(UNTRAINED_WEIGHT)
    }


    /// Error of the slot; `1` for an untrained one.
    pub fn error(&self) -> f64 {
        self.member()
            .map(|m| m.error)
            .unwrap_or(UNTRAINED_ERROR)
    }
}


/// Statistics of a completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    /// Round index, starting from `0`.
    pub iteration: usize,
    /// Number of rows after this round's augmentation.
    pub n_rows: usize,
    /// Number of minority rows after this round's augmentation.
    pub n_minority: usize,
    /// Weight of the hypothesis trained in this round.
    pub estimator_weight: f64,
    /// Weighted error of the hypothesis trained in this round.
    pub error: f64,
    /// Sum of the weights returned by the booster,
    /// before renormalization.
    pub weight_sum: f64,
    /// Cumulative running time in milliseconds.
    pub time_ms: u128,
}


/// The trained state returned by [`SmoteBoost::fit`](crate::SmoteBoost::fit).
///
/// Holds one slot per allowed round, the minority label used for
/// oversampling, and the per-round statistics.
/// The final sample weights are not kept.
#[derive(Debug, Clone)]
pub struct SmoteBoostClassifier<H> {
    pub(super) slots: Vec<EnsembleSlot<H>>,
    pub(super) minority_target: i64,
    pub(super) classes: Vec<i64>,
    pub(super) reports: Vec<RoundReport>,
}


impl<H> SmoteBoostClassifier<H> {
    /// Returns every slot, trained or not. The length equals `n_estimators`.
    pub fn slots(&self) -> &[EnsembleSlot<H>] {
        &self.slots[..]
    }


    /// Returns the trained hypotheses in round order.
    pub fn estimators(&self) -> Vec<&H> {
        self.slots.iter()
            .filter_map(|slot| slot.member())
            .map(|member| &member.hypothesis)
            .collect()
    }


    /// Returns the number of trained slots.
    pub fn n_trained(&self) -> usize {
        self.slots.iter()
            .filter(|slot| slot.is_trained())
            .count()
    }


    /// Returns the weight of every slot; untrained slots report `0`.
    pub fn estimator_weights(&self) -> Vec<f64> {
        self.slots.iter()
            .map(|slot| slot.weight())
            .collect()
    }


    /// Returns the error of every slot; untrained slots report `1`.
    pub fn estimator_errors(&self) -> Vec<f64> {
        self.slots.iter()
            .map(|slot| slot.error())
            .collect()
    }


    /// Returns the label that was oversampled.
    pub fn minority_target(&self) -> i64 {
        self.minority_target
    }


    /// Returns the per-round statistics of the trained rounds.
    pub fn reports(&self) -> &[RoundReport] {
        &self.reports[..]
    }
}


impl<H> Classifier for SmoteBoostClassifier<H>
    where H: Classifier,
{
    fn classes(&self) -> &[i64] {
        &self.classes[..]
    }


    /// Weighted sum of the votes of the trained members.
    /// Untrained slots are skipped.
    fn confidence(&self, x: &[f64]) -> Vec<f64> {
        let mut scores = vec![0f64; self.classes.len()];
        self.slots.iter()
            .filter_map(|slot| slot.member())
            .for_each(|member| {
                let vote = member.hypothesis.confidence(x);
                scores.iter_mut()
                    .zip(vote)
                    .for_each(|(s, v)| *s += member.weight * v);
            });
        scores
    }
}
