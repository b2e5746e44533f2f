use heytherapy_core::models::check_in::CheckIn;
use heytherapy_core::models::patient::{PatientRecord, ReviewUpdate};

use crate::error::StorageError;

/// Keyed access to patient records.
///
/// Implementations must make each call atomic with respect to the others
/// and must yield records from [`list`](RecordStore::list) in the order
/// their identifiers were first stored.
pub trait RecordStore: Send + Sync {
    fn get(&self, patient_id: &str) -> Result<Option<PatientRecord>, StorageError>;

    /// Insert or replace a whole record. A replaced record keeps its
    /// position in the listing order.
    fn put(&self, record: PatientRecord) -> Result<(), StorageError>;

    /// Append a check-in, creating the record if this is the identifier's
    /// first submission. Returns the record as stored.
    fn append_check_in(
        &self,
        patient_id: &str,
        check_in: CheckIn,
    ) -> Result<PatientRecord, StorageError>;

    /// Apply a clinician review edit to an existing record.
    fn review(
        &self,
        patient_id: &str,
        update: ReviewUpdate,
    ) -> Result<PatientRecord, StorageError>;

    fn list(&self) -> Result<Vec<PatientRecord>, StorageError>;

    fn len(&self) -> Result<usize, StorageError>;

    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
