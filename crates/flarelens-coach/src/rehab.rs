//! Deterministic rehab guidance per session outcome.
//!
//! Used directly when no vision collaborator is wired in, and as the
//! degraded response when the collaborator is unavailable.

use flarelens_core::models::sample::RehabFeedback;

/// Fixed guidance text for a rehab session outcome.
pub fn guidance(feedback: RehabFeedback) -> &'static str {
    match feedback {
        RehabFeedback::PoorPosture => {
            "Posture screening flagged poor form. Keep your back straight \
             during the stretch and try again in 30 minutes."
        }
        RehabFeedback::Fatigue => {
            "Pacing coach: fatigue detected. Rest for 20 minutes before the \
             next exercise block."
        }
        RehabFeedback::Good => "Good posture. Session completed successfully.",
        RehabFeedback::Unknown => {
            "No session outcome recorded. Log your next guided session to \
             receive posture feedback."
        }
    }
}
