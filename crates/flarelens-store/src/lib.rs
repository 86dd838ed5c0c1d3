//! flarelens-store
//!
//! Append-only patient telemetry log. The store enforces per-patient
//! chronological order and field validation at the append boundary; scoring
//! and classification operate on immutable snapshots it hands out.
//!
//! [`LogStore`] is the seam for a real persistence backend — the pipeline
//! only ever talks to the trait.

pub mod error;
pub mod memory;

use flarelens_core::models::sample::MetricSample;

use crate::error::StoreError;

/// An append-only, per-patient ordered log of metric samples.
pub trait LogStore: Send + Sync {
    /// Append a sample to its patient's log.
    ///
    /// Fails with `StoreError::Validation` if any field is out of domain and
    /// `StoreError::OutOfOrder` if the timestamp precedes the patient's last
    /// recorded sample. Either failure leaves the log untouched — append is
    /// atomic. Equal timestamps are accepted (non-decreasing, not strictly
    /// increasing).
    fn append(&self, sample: MetricSample) -> Result<(), StoreError>;

    /// The last `min(n, len)` samples for a patient, oldest first.
    /// Unknown patients yield an empty window, not an error.
    fn window(&self, patient_id: &str, n: usize) -> Vec<MetricSample>;

    /// The most recent sample for a patient.
    fn latest(&self, patient_id: &str) -> Result<MetricSample, StoreError>;
}
