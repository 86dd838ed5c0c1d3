use thiserror::Error;

use flarelens_core::error::ValidationError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "out-of-order sample for patient {patient_id}: \
         received {received} but last recorded is {last}"
    )]
    OutOfOrder {
        patient_id: String,
        last: jiff::Timestamp,
        received: jiff::Timestamp,
    },

    #[error("no samples recorded for patient: {patient_id}")]
    NotFound { patient_id: String },
}
