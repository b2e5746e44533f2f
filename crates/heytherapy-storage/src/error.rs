use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("patient not found: {patient_id}")]
    NotFound { patient_id: String },

    #[error("record store lock poisoned")]
    LockPoisoned,
}
