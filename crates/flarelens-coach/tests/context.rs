use flarelens_coach::context::{build_coaching_context, build_summary_context};
use flarelens_coach::rehab;
use flarelens_coach::trend::TrendDirection;
use flarelens_core::models::sample::{MetricSample, RehabFeedback};

fn sample_at(minute: u8, pain: u8, stress: u8, hrv: f64) -> MetricSample {
    MetricSample {
        patient_id: "p-001".to_string(),
        timestamp: format!("2026-08-20T08:{minute:02}:00Z").parse().unwrap(),
        pain_score: pain,
        stiffness_score: pain,
        stress_score: stress,
        hrv_avg: hrv,
        med_adherence: 0.9,
        rehab_feedback: RehabFeedback::Good,
    }
}

#[test]
fn empty_window_builds_no_context() {
    assert!(build_summary_context("p-001", &[]).is_none());
}

#[test]
fn single_sample_reports_insufficient_data() {
    let ctx = build_summary_context("p-001", &[sample_at(0, 4, 4, 0.6)]).unwrap();
    assert_eq!(ctx.sample_count, 1);
    assert_eq!(ctx.trends.pain, TrendDirection::InsufficientData);
    assert_eq!(ctx.trends.hrv, TrendDirection::InsufficientData);
}

#[test]
fn worsening_week_trends_up() {
    let window: Vec<_> = (0u8..6)
        .map(|i| sample_at(i, 2 + i, 3 + i, 0.8 - f64::from(i) * 0.1))
        .collect();
    let ctx = build_summary_context("p-001", &window).unwrap();
    assert_eq!(ctx.trends.pain, TrendDirection::Up);
    assert_eq!(ctx.trends.stress, TrendDirection::Up);
    assert_eq!(ctx.trends.hrv, TrendDirection::Down);
}

#[test]
fn prompt_block_carries_counts_and_trends() {
    let window = vec![sample_at(0, 2, 2, 0.8), sample_at(1, 8, 8, 0.8)];
    let block = build_summary_context("p-001", &window)
        .unwrap()
        .to_prompt_block();
    assert!(block.starts_with("<patient_window>"));
    assert!(block.ends_with("</patient_window>"));
    assert!(block.contains("<entries>2</entries>"));
    assert!(block.contains("name=\"pain\""));
    assert!(block.contains("trend=\"up\""));
}

#[test]
fn high_stress_low_hrv_labels() {
    let latest = sample_at(0, 4, 9, 0.2);
    let ctx = build_coaching_context(&latest, "14:30", None);
    assert_eq!(ctx.mood, "tense and frustrated");
    assert_eq!(ctx.hrv_status, "very low HRV, rest signal");
    assert_eq!(ctx.time_of_day, "14:30");
}

#[test]
fn calm_labels_at_thresholds() {
    // stress 7 and hrv 0.4 sit exactly on the thresholds: not tense, not low.
    let latest = sample_at(0, 4, 7, 0.4);
    let ctx = build_coaching_context(&latest, "09:00", None);
    assert_eq!(ctx.mood, "settled");
    assert_eq!(ctx.hrv_status, "normal");
}

#[test]
fn coaching_prompt_includes_trend_block_when_present() {
    let window = vec![sample_at(0, 2, 2, 0.8), sample_at(1, 8, 8, 0.8)];
    let trend = build_summary_context("p-001", &window);
    let ctx = build_coaching_context(&sample_at(1, 8, 8, 0.8), "14:30", trend);
    let prompt = ctx.to_prompt();
    assert!(prompt.contains("Patient reports mood"));
    assert!(prompt.contains("<patient_window>"));
}

#[test]
fn rehab_guidance_is_deterministic_per_outcome() {
    assert!(rehab::guidance(RehabFeedback::PoorPosture).contains("back straight"));
    assert!(rehab::guidance(RehabFeedback::Fatigue).contains("Rest for 20 minutes"));
    assert!(rehab::guidance(RehabFeedback::Good).contains("Good posture"));
    assert!(rehab::guidance(RehabFeedback::Unknown).contains("No session outcome"));
}
