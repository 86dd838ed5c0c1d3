use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four normalized features the risk model combines.
///
/// Declaration order is the fixed tie-break priority used when ranking
/// contributing factors: stress and adherence are assumed to drive flares
/// more than momentary pain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFeature {
    Stress,
    Adherence,
    Hrv,
    Pain,
}

/// One feature's weighted contribution to a risk probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorContribution {
    pub feature: RiskFeature,
    pub weight: f64,
}

/// Discrete alert tier derived from a flare-risk probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertTier {
    Low,
    Moderate,
    High,
}

impl AlertTier {
    /// Fixed clinician-facing message for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            AlertTier::High => {
                "HIGH RISK: contact the clinic promptly. Possible stress or disease flare."
            }
            AlertTier::Moderate => {
                "MODERATE RISK: stress intervention and rest are recommended."
            }
            AlertTier::Low => "Flare risk is low. Continue monitoring.",
        }
    }
}

/// A flare-risk assessment derived from a single metric sample.
///
/// Computed fresh on demand and never persisted — recomputing from the same
/// sample always yields the same assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub patient_id: String,
    /// Flare probability in [0, 0.99]. The model never claims certainty.
    pub probability: f64,
    pub tier: AlertTier,
    /// The tier's fixed message, so callers receive actionable text along
    /// with the discrete tier.
    pub message: String,
    /// Per-feature weighted contributions, highest first. Ties resolve by
    /// the fixed feature priority so the "top driver" is reproducible.
    pub contributing_factors: Vec<FactorContribution>,
}
