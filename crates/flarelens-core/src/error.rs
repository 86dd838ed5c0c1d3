use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A field of a metric sample failed domain validation.
///
/// Carries the field name and the received value so the caller can correct
/// its input. Validation rejects out-of-domain values outright — nothing is
/// silently clamped or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, value: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}
