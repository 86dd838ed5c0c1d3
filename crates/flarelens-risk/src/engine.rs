use flarelens_core::models::assessment::{FactorContribution, RiskAssessment, RiskFeature};
use flarelens_core::models::sample::MetricSample;

use crate::classify;
use crate::weights::RiskWeights;

/// The raw weighted sum is damped before reporting; the model must never
/// claim certainty, so the final probability is also capped below 1.0.
const DAMPING: f64 = 0.9;
const CEILING: f64 = 0.99;

/// Linear flare-risk model over four normalized features.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    weights: RiskWeights,
}

impl RiskEngine {
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Flare probability in [0, 0.99] for a validated sample.
    ///
    /// Each feature is normalized so that 1.0 means maximum risk (low HRV
    /// and low adherence raise risk), then combined by the configured
    /// weights and damped.
    pub fn score(&self, sample: &MetricSample) -> f64 {
        let raw: f64 = self
            .contributions(sample)
            .iter()
            .map(|c| c.weight)
            .sum();
        (raw * DAMPING).min(CEILING)
    }

    /// Per-feature weighted contributions to the raw score, highest first.
    ///
    /// Ties break by the fixed feature priority (stress, adherence, hrv,
    /// pain) so the reported top driver is reproducible run to run.
    pub fn contributions(&self, sample: &MetricSample) -> Vec<FactorContribution> {
        let mut factors = vec![
            FactorContribution {
                feature: RiskFeature::Stress,
                weight: self.weights.stress * f64::from(sample.stress_score) / 10.0,
            },
            FactorContribution {
                feature: RiskFeature::Adherence,
                weight: self.weights.adherence * (1.0 - sample.med_adherence),
            },
            FactorContribution {
                feature: RiskFeature::Hrv,
                weight: self.weights.hrv * (1.0 - sample.hrv_avg),
            },
            FactorContribution {
                feature: RiskFeature::Pain,
                weight: self.weights.pain * f64::from(sample.pain_score) / 10.0,
            },
        ];
        // The vec starts in priority order, so a stable sort on descending
        // weight is all the tie-breaking needed.
        factors.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        factors
    }

    /// Score and classify a sample in one pass.
    pub fn assess(&self, sample: &MetricSample) -> RiskAssessment {
        let probability = self.score(sample);
        let tier = classify(probability);
        RiskAssessment {
            patient_id: sample.patient_id.clone(),
            probability,
            tier,
            message: tier.message().to_string(),
            contributing_factors: self.contributions(sample),
        }
    }
}
