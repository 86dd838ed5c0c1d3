use flarelens_core::models::sample::{MetricSample, RehabFeedback};
use flarelens_risk::{RiskEngine, RiskWeights};

fn sample(pain: u8, stress: u8, hrv: f64, adherence: f64) -> MetricSample {
    MetricSample {
        patient_id: "p-001".to_string(),
        timestamp: "2026-08-20T08:00:00Z".parse().unwrap(),
        pain_score: pain,
        stiffness_score: 2,
        stress_score: stress,
        hrv_avg: hrv,
        med_adherence: adherence,
        rehab_feedback: RehabFeedback::Good,
    }
}

#[test]
fn worked_example_scores_0_666() {
    // pain 8, stress 9, hrv 0.2, adherence 0.5:
    // raw = 0.2*0.8 + 0.3*0.9 + 0.3*0.5 + 0.2*0.8 = 0.74
    // probability = 0.74 * 0.9 = 0.666
    let engine = RiskEngine::default();
    let p = engine.score(&sample(8, 9, 0.2, 0.5));
    assert!((p - 0.666).abs() < 1e-12, "got {p}");
}

#[test]
fn probability_never_exceeds_ceiling() {
    let engine = RiskEngine::default();
    // Worst possible inputs still cap below certainty.
    let p = engine.score(&sample(10, 10, 0.0, 0.0));
    assert!(p <= 0.99);
    // Best possible inputs score zero.
    assert_eq!(engine.score(&sample(0, 0, 1.0, 1.0)), 0.0);
}

#[test]
fn score_is_deterministic() {
    let engine = RiskEngine::default();
    let s = sample(6, 7, 0.3, 0.8);
    assert_eq!(engine.score(&s), engine.score(&s));
    assert_eq!(engine.assess(&s), engine.assess(&s));
}

#[test]
fn monotone_in_pain() {
    let engine = RiskEngine::default();
    let mut prev = -1.0;
    for pain in 0..=10 {
        let p = engine.score(&sample(pain, 5, 0.5, 0.5));
        assert!(p >= prev, "score decreased at pain {pain}");
        prev = p;
    }
}

#[test]
fn monotone_in_stress() {
    let engine = RiskEngine::default();
    let mut prev = -1.0;
    for stress in 0..=10 {
        let p = engine.score(&sample(5, stress, 0.5, 0.5));
        assert!(p >= prev, "score decreased at stress {stress}");
        prev = p;
    }
}

#[test]
fn monotone_in_hrv_impact() {
    let engine = RiskEngine::default();
    let mut prev = -1.0;
    for step in 0..=10 {
        let hrv = 1.0 - f64::from(step) / 10.0;
        let p = engine.score(&sample(5, 5, hrv, 0.5));
        assert!(p >= prev, "score decreased at hrv {hrv}");
        prev = p;
    }
}

#[test]
fn custom_weights_shift_the_score() {
    let weights = RiskWeights::new(1.0, 0.0, 0.0, 0.0).unwrap();
    let engine = RiskEngine::new(weights);
    assert_eq!(engine.weights(), &weights);
    // Only pain contributes: 0.8 * 0.9 = 0.72.
    let p = engine.score(&sample(8, 10, 0.0, 0.0));
    assert!((p - 0.72).abs() < 1e-12);
}

#[test]
fn weights_must_sum_to_one() {
    assert!(RiskWeights::new(0.5, 0.5, 0.5, 0.5).is_err());
    assert!(RiskWeights::new(0.25, 0.25, 0.25, 0.25).is_ok());
}

#[test]
fn negative_weight_rejected() {
    let err = RiskWeights::new(-0.2, 0.6, 0.3, 0.3).unwrap_err();
    assert_eq!(err.field, "pain");
}
