use rand::{rngs::StdRng, SeedableRng};
use smoteboost::prelude::*;


/// Predicts label index `1` if `x[0] > 1.5`, with probability `0.75`.
#[derive(Debug, Clone)]
struct Threshold {
    classes: Vec<i64>,
}


impl Classifier for Threshold {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn confidence(&self, x: &[f64]) -> Vec<f64> {
        if x[0] > 1.5 { vec![0.25, 0.75] } else { vec![0.75, 0.25] }
    }
}


struct ThresholdLearner;


impl WeakLearner for ThresholdLearner {
    type Hypothesis = Threshold;

    fn name(&self) -> &str {
        "Threshold"
    }

    fn produce(&self, _sample: &Sample, _dist: &[f64], classes: &[i64])
        -> Threshold
    {
        Threshold { classes: classes.to_vec() }
    }
}


fn line(target: Vec<i64>) -> Sample {
    let rows = (0..target.len()).map(|i| vec![i as f64]).collect();
    Sample::from_rows(rows, target).unwrap()
}


fn booster(algorithm: Algorithm) -> AdaBoostStep<ThresholdLearner> {
    let mut booster = AdaBoostStep::init(ThresholdLearner).algorithm(algorithm);
    let params = BoostingParams { n_estimators: 5, learning_rate: 1.0 };
    booster.preprocess(&params).unwrap();
    booster
}


fn expect_step<H>(outcome: BoostOutcome<H>) -> BoostStep<H> {
    match outcome {
        BoostOutcome::Step(step) => step,
        BoostOutcome::Stop => panic!("unexpected stop signal"),
    }
}


/// Tests for `AdaBoostStep`.
#[cfg(test)]
pub mod adaboost_step_tests {
    use super::*;

    #[test]
    fn samme_matches_the_closed_form() {
        // Predictions 0 0 1 1, row 3 is wrong.
        let sample = line(vec![0, 0, 1, 0]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        let mut booster = booster(Algorithm::Samme);
        let step = expect_step(booster.step(0, &sample, &dist, &mut rng).unwrap());

        assert!((step.error - 0.25).abs() < 1e-12);
        // ln((1 - 0.25) / 0.25) + ln(2 - 1)
        assert!((step.estimator_weight - 3f64.ln()).abs() < 1e-12);
        let expected = [0.25, 0.25, 0.25, 0.75];
        for (w, e) in step.weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12);
        }
    }


    #[test]
    fn learning_rate_scales_the_learner_weight() {
        let sample = line(vec![0, 0, 1, 0]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        let mut booster = AdaBoostStep::init(ThresholdLearner)
            .algorithm(Algorithm::Samme);
        let params = BoostingParams { n_estimators: 5, learning_rate: 0.5 };
        booster.preprocess(&params).unwrap();
        let step = expect_step(booster.step(0, &sample, &dist, &mut rng).unwrap());

        assert!((step.estimator_weight - 0.5 * 3f64.ln()).abs() < 1e-12);
        assert!((step.weights[3] - 0.25 * 3f64.sqrt()).abs() < 1e-12);
    }


    #[test]
    fn last_round_keeps_the_weights() {
        let sample = line(vec![0, 0, 1, 0]);
        let dist = vec![0.1, 0.2, 0.3, 0.4];
        let mut rng = StdRng::seed_from_u64(0);

        for algorithm in [Algorithm::Samme, Algorithm::SammeR] {
            let mut booster = booster(algorithm);
            let step = expect_step(
                booster.step(4, &sample, &dist, &mut rng).unwrap()
            );
            assert_eq!(step.weights, dist);
            assert!(step.error > 0.0);
        }
    }


    #[test]
    fn samme_stops_when_worse_than_random() {
        // Every prediction is wrong.
        let sample = line(vec![1, 1, 0, 0]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        let mut booster = booster(Algorithm::Samme);
        let outcome = booster.step(0, &sample, &dist, &mut rng).unwrap();
        assert!(matches!(outcome, BoostOutcome::Stop));
    }


    #[test]
    fn perfect_hypothesis_has_zero_error() {
        let sample = line(vec![0, 0, 1, 1]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        for algorithm in [Algorithm::Samme, Algorithm::SammeR] {
            let mut booster = booster(algorithm);
            let step = expect_step(
                booster.step(0, &sample, &dist, &mut rng).unwrap()
            );
            assert_eq!(step.error, 0.0);
            assert_eq!(step.estimator_weight, 1.0);
            assert_eq!(step.weights, dist);
        }
    }


    #[test]
    fn samme_r_reweights_by_log_probabilities() {
        let sample = line(vec![0, 0, 1, 0]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        let mut booster = booster(Algorithm::SammeR);
        let step = expect_step(booster.step(0, &sample, &dist, &mut rng).unwrap());

        assert_eq!(step.estimator_weight, 1.0);
        assert!((step.error - 0.25).abs() < 1e-12);

        // K = 2: correct rows shrink by 1/sqrt(3), the wrong one grows by sqrt(3).
        let s = 3f64.sqrt();
        let expected = [0.25 / s, 0.25 / s, 0.25 / s, 0.25 * s];
        for (w, e) in step.weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12);
        }
    }


    #[test]
    fn a_single_class_is_rejected() {
        let sample = line(vec![3, 3, 3]);
        let dist = vec![1.0 / 3.0; 3];
        let mut rng = StdRng::seed_from_u64(0);

        let mut booster = booster(Algorithm::Samme);
        let err = booster.step(0, &sample, &dist, &mut rng).unwrap_err();
        assert!(matches!(err, SmoteBoostError::InvalidParameter { .. }));
    }


    #[test]
    fn votes_follow_the_algorithm() {
        let sample = line(vec![0, 0, 1, 0]);
        let dist = vec![0.25; 4];
        let mut rng = StdRng::seed_from_u64(0);

        let mut samme = booster(Algorithm::Samme);
        let h = expect_step(samme.step(0, &sample, &dist, &mut rng).unwrap())
            .hypothesis;
        assert_eq!(h.algorithm(), Algorithm::Samme);
        assert_eq!(h.confidence(&[3.0]), vec![-1.0, 1.0]);
        assert_eq!(h.predict(&[3.0]), 1);

        let mut samme_r = booster(Algorithm::SammeR);
        let h = expect_step(samme_r.step(0, &sample, &dist, &mut rng).unwrap())
            .hypothesis;
        let half = 3f64.ln() / 2.0;
        let vote = h.confidence(&[0.0]);
        assert!((vote[0] - half).abs() < 1e-12);
        assert!((vote[1] + half).abs() < 1e-12);
        assert_eq!(h.predict(&[0.0]), 0);
    }


    #[test]
    fn names_and_info() {
        let samme = AdaBoostStep::init(DecisionStump::init())
            .algorithm(Algorithm::Samme);
        assert_eq!(samme.name(), "AdaBoost (SAMME)");

        let samme_r = AdaBoostStep::init(DecisionStump::init());
        assert_eq!(samme_r.name(), "AdaBoost (SAMME.R)");
        assert_eq!(samme_r.current_algorithm(), Algorithm::SammeR);

        let info = samme_r.info().unwrap();
        assert!(info.contains(&("Weak Learner", "Decision Stump".to_string())));
    }
}
