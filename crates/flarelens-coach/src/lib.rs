//! flarelens-coach
//!
//! Everything between the deterministic pipeline and the generative
//! collaborators: recent-window trend analysis, structured context payloads
//! for coaching and clinician summaries, and the narrow collaborator traits
//! those payloads are handed to. The Bedrock implementation lives in
//! [`bedrock`]; the rest of this crate never performs I/O, so a collaborator
//! outage can only ever degrade a response, not break scoring.

pub mod bedrock;
pub mod context;
pub mod error;
pub mod prompts;
pub mod rehab;
pub mod trend;

use crate::error::CollaboratorError;

/// External free-text generation service (coaching, clinician summaries).
///
/// The pipeline builds a structured context, renders it to a prompt, and
/// hands it to this trait. Implementations live at the edge of the system;
/// any failure surfaces as [`CollaboratorError::Unavailable`].
pub trait TextGeneration: Send + Sync {
    fn generate(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;
}

/// External vision screening service for rehab posture checks.
///
/// Pass-through contract only: image bytes in, screening label out.
pub trait VisionAnalysis: Send + Sync {
    fn analyze(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;
}
