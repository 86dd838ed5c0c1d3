//! flarelens-core
//!
//! Pure domain types for patient telemetry and flare-risk assessment.
//! No AWS or HTTP dependency — this is the shared vocabulary of the
//! Flarelens system.

pub mod error;
pub mod models;
