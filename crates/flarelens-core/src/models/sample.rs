use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Outcome of a guided rehab session, as reported by the patient's device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RehabFeedback {
    Good,
    PoorPosture,
    Fatigue,
    Unknown,
}

/// One telemetry entry for one patient: self-reported symptom scores plus
/// wearable-derived metrics. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSample {
    pub patient_id: String,
    pub timestamp: jiff::Timestamp,
    /// Self-reported pain, 0 (none) to 10 (worst).
    pub pain_score: u8,
    /// Self-reported joint stiffness, 0 to 10.
    pub stiffness_score: u8,
    /// Self-reported stress, 0 to 10.
    pub stress_score: u8,
    /// Daily HRV average normalized to [0, 1]; 1.0 is best autonomic balance.
    pub hrv_avg: f64,
    /// Fraction of prescribed doses taken, [0, 1].
    pub med_adherence: f64,
    pub rehab_feedback: RehabFeedback,
}

impl MetricSample {
    /// Validate every field against its domain. Out-of-domain values are
    /// rejected with the field name and received value — never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.patient_id.is_empty() {
            return Err(ValidationError::new(
                "patient_id",
                "",
                "patient_id must be non-empty",
            ));
        }
        for (field, value) in [
            ("pain_score", self.pain_score),
            ("stiffness_score", self.stiffness_score),
            ("stress_score", self.stress_score),
        ] {
            if value > 10 {
                return Err(ValidationError::new(
                    field,
                    value,
                    format!("{field} {value} is outside range [0, 10]"),
                ));
            }
        }
        for (field, value) in [("hrv_avg", self.hrv_avg), ("med_adherence", self.med_adherence)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::new(
                    field,
                    value,
                    format!("{field} {value} is outside range [0, 1]"),
                ));
            }
        }
        Ok(())
    }
}
