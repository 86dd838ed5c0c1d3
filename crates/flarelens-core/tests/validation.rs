use flarelens_core::models::sample::{MetricSample, RehabFeedback};

fn valid_sample() -> MetricSample {
    MetricSample {
        patient_id: "p-001".to_string(),
        timestamp: "2026-08-20T08:00:00Z".parse().unwrap(),
        pain_score: 4,
        stiffness_score: 3,
        stress_score: 5,
        hrv_avg: 0.6,
        med_adherence: 0.9,
        rehab_feedback: RehabFeedback::Good,
    }
}

#[test]
fn valid_sample_passes() {
    assert!(valid_sample().validate().is_ok());
}

#[test]
fn empty_patient_id_rejected() {
    let mut sample = valid_sample();
    sample.patient_id = String::new();
    let err = sample.validate().unwrap_err();
    assert_eq!(err.field, "patient_id");
}

#[test]
fn pain_score_above_ten_rejected() {
    let mut sample = valid_sample();
    sample.pain_score = 11;
    let err = sample.validate().unwrap_err();
    assert_eq!(err.field, "pain_score");
    assert_eq!(err.value, "11");
}

#[test]
fn stress_score_above_ten_rejected() {
    let mut sample = valid_sample();
    sample.stress_score = 42;
    assert_eq!(sample.validate().unwrap_err().field, "stress_score");
}

#[test]
fn stiffness_score_above_ten_rejected() {
    let mut sample = valid_sample();
    sample.stiffness_score = 11;
    assert_eq!(sample.validate().unwrap_err().field, "stiffness_score");
}

#[test]
fn hrv_outside_unit_interval_rejected() {
    let mut sample = valid_sample();
    sample.hrv_avg = 1.5;
    assert_eq!(sample.validate().unwrap_err().field, "hrv_avg");

    sample.hrv_avg = -0.1;
    assert_eq!(sample.validate().unwrap_err().field, "hrv_avg");
}

#[test]
fn adherence_outside_unit_interval_rejected() {
    let mut sample = valid_sample();
    sample.med_adherence = 1.01;
    assert_eq!(sample.validate().unwrap_err().field, "med_adherence");
}

#[test]
fn nan_hrv_rejected() {
    let mut sample = valid_sample();
    sample.hrv_avg = f64::NAN;
    assert!(sample.validate().is_err());
}

#[test]
fn boundary_values_accepted() {
    let mut sample = valid_sample();
    sample.pain_score = 10;
    sample.stress_score = 0;
    sample.hrv_avg = 0.0;
    sample.med_adherence = 1.0;
    assert!(sample.validate().is_ok());
}

#[test]
fn error_message_names_field_and_value() {
    let mut sample = valid_sample();
    sample.hrv_avg = 2.0;
    let err = sample.validate().unwrap_err();
    assert!(err.to_string().contains("hrv_avg"));
    assert!(err.to_string().contains('2'));
}
