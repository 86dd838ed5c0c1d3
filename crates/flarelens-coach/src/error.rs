use thiserror::Error;

/// Failures of the external generation/vision collaborators.
///
/// Always recoverable: the caller degrades to the deterministic portion of
/// its response and keeps serving.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("collaborator response could not be parsed: {0}")]
    ResponseParse(String),
}
