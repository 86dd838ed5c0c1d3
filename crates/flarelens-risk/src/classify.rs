use flarelens_core::models::assessment::AlertTier;

/// Map a flare probability to its alert tier.
///
/// Cut points are exact and exclusive upward: 0.75 itself is still
/// `Moderate`, 0.55 itself is still `Low`. Each call is independent — there
/// is no hysteresis across assessments.
pub fn classify(probability: f64) -> AlertTier {
    if probability > 0.75 {
        AlertTier::High
    } else if probability > 0.55 {
        AlertTier::Moderate
    } else {
        AlertTier::Low
    }
}
