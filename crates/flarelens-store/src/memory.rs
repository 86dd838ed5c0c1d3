//! In-memory [`LogStore`] backed by one mutex per patient.
//!
//! The outer `RwLock` only guards the patient → log map; each patient's
//! samples live behind their own `Mutex`, so appends for distinct patients
//! proceed in parallel while appends for the same patient serialize.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use flarelens_core::models::sample::MetricSample;

use crate::LogStore;
use crate::error::StoreError;

type PatientLog = Arc<Mutex<Vec<MetricSample>>>;

#[derive(Default)]
pub struct MemoryLogStore {
    logs: RwLock<HashMap<String, PatientLog>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the patient's log handle, creating it on first append.
    fn log_handle(&self, patient_id: &str) -> PatientLog {
        {
            let map = self
                .logs
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(log) = map.get(patient_id) {
                return Arc::clone(log);
            }
        }
        let mut map = self
            .logs
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(map.entry(patient_id.to_string()).or_default())
    }

    /// Fetch the patient's log handle without creating one.
    fn existing_handle(&self, patient_id: &str) -> Option<PatientLog> {
        let map = self
            .logs
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        map.get(patient_id).map(Arc::clone)
    }
}

impl LogStore for MemoryLogStore {
    fn append(&self, sample: MetricSample) -> Result<(), StoreError> {
        // Validation and the ordering check both complete before any
        // mutation, so a failed append leaves the log exactly as it was.
        sample.validate()?;

        let handle = self.log_handle(&sample.patient_id);
        let mut log = handle.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(last) = log.last()
            && sample.timestamp < last.timestamp
        {
            return Err(StoreError::OutOfOrder {
                patient_id: sample.patient_id,
                last: last.timestamp,
                received: sample.timestamp,
            });
        }

        debug!(
            patient_id = %sample.patient_id,
            timestamp = %sample.timestamp,
            len = log.len() + 1,
            "sample appended"
        );
        log.push(sample);
        Ok(())
    }

    fn window(&self, patient_id: &str, n: usize) -> Vec<MetricSample> {
        let Some(handle) = self.existing_handle(patient_id) else {
            return Vec::new();
        };
        let log = handle.lock().unwrap_or_else(PoisonError::into_inner);
        let start = log.len().saturating_sub(n);
        log[start..].to_vec()
    }

    fn latest(&self, patient_id: &str) -> Result<MetricSample, StoreError> {
        let handle = self
            .existing_handle(patient_id)
            .ok_or_else(|| StoreError::NotFound {
                patient_id: patient_id.to_string(),
            })?;
        let log = handle.lock().unwrap_or_else(PoisonError::into_inner);
        log.last().cloned().ok_or_else(|| StoreError::NotFound {
            patient_id: patient_id.to_string(),
        })
    }
}
