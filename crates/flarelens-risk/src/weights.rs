use serde::{Deserialize, Serialize};
use ts_rs::TS;

use flarelens_core::error::ValidationError;

/// Feature weights for the linear risk model.
///
/// The defaults deliberately weight stress and medication adherence above
/// momentary pain and HRV: behavioral and psychosocial factors are assumed
/// to drive flares more than a single day's pain report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskWeights {
    pub pain: f64,
    pub stress: f64,
    pub adherence: f64,
    pub hrv: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            pain: 0.2,
            stress: 0.3,
            adherence: 0.3,
            hrv: 0.2,
        }
    }
}

impl RiskWeights {
    /// Build a custom weighting. Weights must be non-negative and sum to 1.0
    /// (within floating-point tolerance) so the raw score stays in [0, 1].
    pub fn new(pain: f64, stress: f64, adherence: f64, hrv: f64) -> Result<Self, ValidationError> {
        let weights = Self {
            pain,
            stress,
            adherence,
            hrv,
        };
        for (field, value) in [
            ("pain", pain),
            ("stress", stress),
            ("adherence", adherence),
            ("hrv", hrv),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::new(
                    field,
                    value,
                    format!("weight {field} must be a non-negative finite number"),
                ));
            }
        }
        let sum = pain + stress + adherence + hrv;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ValidationError::new(
                "weights",
                sum,
                format!("weights must sum to 1.0, got {sum}"),
            ));
        }
        Ok(weights)
    }
}
