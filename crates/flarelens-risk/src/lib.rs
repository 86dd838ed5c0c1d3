//! flarelens-risk
//!
//! Deterministic flare-risk scoring and alert classification. Everything in
//! this crate is a pure function over a validated sample: no I/O, no clock,
//! no randomness. The same sample always produces the same assessment,
//! which is what makes assessments reproducible for audit.

pub mod classify;
pub mod engine;
pub mod weights;

pub use classify::classify;
pub use engine::RiskEngine;
pub use weights::RiskWeights;
