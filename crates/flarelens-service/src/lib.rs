//! flarelens-service
//!
//! The façade over the telemetry pipeline: ingest a sample → append to the
//! log store → score → classify → return the assessment. Coaching, summary,
//! and rehab operations additionally call out to the generative
//! collaborators — and degrade to their deterministic portion whenever a
//! collaborator is down. The store and collaborators are injected, so the
//! whole pipeline is testable with no network in sight.

pub mod error;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use flarelens_coach::context::{
    self, CoachingContext, DEFAULT_WINDOW_SIZE, SummaryContext,
};
use flarelens_coach::{TextGeneration, VisionAnalysis, prompts, rehab};
use flarelens_core::models::assessment::RiskAssessment;
use flarelens_core::models::sample::{MetricSample, RehabFeedback};
use flarelens_risk::RiskEngine;
use flarelens_store::LogStore;
use flarelens_store::error::StoreError;

use crate::error::ServiceError;

/// Coaching response: the structured context is always present, the
/// generated text only when the collaborator answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingResponse {
    pub context: CoachingContext,
    pub generated: Option<String>,
}

/// Clinician summary response, degraded the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub context: SummaryContext,
    pub generated: Option<String>,
}

/// Rehab feedback: deterministic guidance for the recorded session outcome,
/// plus the vision screening label when a collaborator produced one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehabResponse {
    pub feedback: RehabFeedback,
    pub guidance: String,
    pub screening_label: Option<String>,
}

/// Orchestrates the store, the risk engine, and the collaborators.
pub struct FlareService<S: LogStore> {
    store: S,
    engine: RiskEngine,
}

impl<S: LogStore> FlareService<S> {
    pub fn new(store: S, engine: RiskEngine) -> Self {
        Self { store, engine }
    }

    /// Ingest one sample: append, then score and classify it.
    ///
    /// A rejected append (validation or ordering) leaves the log untouched
    /// and produces no assessment.
    pub fn ingest(&self, sample: MetricSample) -> Result<RiskAssessment, ServiceError> {
        self.store.append(sample.clone())?;
        let assessment = self.engine.assess(&sample);
        info!(
            patient_id = %assessment.patient_id,
            probability = assessment.probability,
            tier = ?assessment.tier,
            "sample ingested"
        );
        Ok(assessment)
    }

    /// Re-assess the patient's most recent sample. Assessments are derived,
    /// never stored — recomputing is idempotent.
    pub fn latest_assessment(&self, patient_id: &str) -> Result<RiskAssessment, ServiceError> {
        let latest = self.store.latest(patient_id)?;
        Ok(self.engine.assess(&latest))
    }

    /// The last `n` samples for a patient, oldest first. Empty for unknown
    /// patients.
    pub fn window(&self, patient_id: &str, n: usize) -> Vec<MetricSample> {
        self.store.window(patient_id, n)
    }

    /// Personalized relaxation coaching from the patient's latest sample.
    ///
    /// The deterministic context always comes back; the generated text is
    /// omitted when the collaborator is unavailable.
    pub async fn coach<G: TextGeneration>(
        &self,
        patient_id: &str,
        generator: &G,
        time_of_day: &str,
    ) -> Result<CoachingResponse, ServiceError> {
        let latest = self.store.latest(patient_id)?;
        let trend = context::build_summary_context(
            patient_id,
            &self.store.window(patient_id, DEFAULT_WINDOW_SIZE),
        );
        let ctx = context::build_coaching_context(&latest, time_of_day, trend);

        let generated = match generator
            .generate(prompts::COACHING_SYSTEM_PROMPT, &ctx.to_prompt())
            .await
        {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(patient_id, error = %e, "coaching collaborator unavailable, degrading");
                None
            }
        };

        Ok(CoachingResponse {
            context: ctx,
            generated,
        })
    }

    /// Clinician-facing longitudinal summary over the recent window.
    pub async fn clinician_summary<G: TextGeneration>(
        &self,
        patient_id: &str,
        generator: &G,
    ) -> Result<SummaryResponse, ServiceError> {
        let window = self.store.window(patient_id, DEFAULT_WINDOW_SIZE);
        let ctx = context::build_summary_context(patient_id, &window).ok_or_else(|| {
            StoreError::NotFound {
                patient_id: patient_id.to_string(),
            }
        })?;

        let generated = match generator
            .generate(prompts::SUMMARY_SYSTEM_PROMPT, &ctx.to_prompt_block())
            .await
        {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(patient_id, error = %e, "summary collaborator unavailable, degrading");
                None
            }
        };

        Ok(SummaryResponse {
            context: ctx,
            generated,
        })
    }

    /// Rehab feedback for the patient's latest session.
    ///
    /// When an image and a vision collaborator are supplied, the frame is
    /// screened; a collaborator failure degrades to the deterministic
    /// guidance alone.
    pub async fn rehab_feedback<V: VisionAnalysis>(
        &self,
        patient_id: &str,
        screening: Option<(&V, &[u8])>,
    ) -> Result<RehabResponse, ServiceError> {
        let latest = self.store.latest(patient_id)?;

        let screening_label = match screening {
            Some((vision, image)) => match vision.analyze(image).await {
                Ok(label) => Some(label),
                Err(e) => {
                    warn!(patient_id, error = %e, "vision collaborator unavailable, degrading");
                    None
                }
            },
            None => None,
        };

        Ok(RehabResponse {
            feedback: latest.rehab_feedback,
            guidance: rehab::guidance(latest.rehab_feedback).to_string(),
            screening_label,
        })
    }
}
