use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use heytherapy_core::models::check_in::CheckIn;
use heytherapy_core::models::patient::{PatientRecord, ReviewUpdate};
use tracing::debug;

use crate::error::StorageError;
use crate::store::RecordStore;

/// Records held in process memory, lost on restart.
///
/// Concurrent writers to the same identifier are serialized by a single
/// lock; the last write wins.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Records>,
}

#[derive(Debug, Default)]
struct Records {
    /// Records in first-insertion order.
    entries: Vec<PatientRecord>,
    /// Patient identifier to position in `entries`.
    index: HashMap<String, usize>,
}

impl Records {
    fn get_mut(&mut self, patient_id: &str) -> Option<&mut PatientRecord> {
        let position = *self.index.get(patient_id)?;
        self.entries.get_mut(position)
    }

    fn insert(&mut self, record: PatientRecord) -> &PatientRecord {
        let position = match self.index.get(record.patient_id()) {
            Some(&position) => {
                self.entries[position] = record;
                position
            }
            None => {
                let position = self.entries.len();
                self.index.insert(record.patient_id().to_string(), position);
                self.entries.push(record);
                position
            }
        };
        &self.entries[position]
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StorageError> {
        self.inner.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StorageError> {
        self.inner.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, patient_id: &str) -> Result<Option<PatientRecord>, StorageError> {
        let records = self.read()?;
        Ok(records
            .index
            .get(patient_id)
            .map(|&position| records.entries[position].clone()))
    }

    fn put(&self, record: PatientRecord) -> Result<(), StorageError> {
        let mut records = self.write()?;
        debug!(patient_id = record.patient_id(), "storing patient record");
        records.insert(record);
        Ok(())
    }

    fn append_check_in(
        &self,
        patient_id: &str,
        check_in: CheckIn,
    ) -> Result<PatientRecord, StorageError> {
        let mut records = self.write()?;

        if let Some(record) = records.get_mut(patient_id) {
            record.append(check_in);
            debug!(
                patient_id,
                history_len = record.history().len(),
                "appended check-in"
            );
            return Ok(record.clone());
        }

        debug!(patient_id, "creating patient record");
        Ok(records
            .insert(PatientRecord::new(patient_id, check_in))
            .clone())
    }

    fn review(
        &self,
        patient_id: &str,
        update: ReviewUpdate,
    ) -> Result<PatientRecord, StorageError> {
        let mut records = self.write()?;
        let record = records
            .get_mut(patient_id)
            .ok_or_else(|| StorageError::NotFound {
                patient_id: patient_id.to_string(),
            })?;
        record.apply_review(update);
        debug!(patient_id, verified = record.verified(), "review updated");
        Ok(record.clone())
    }

    fn list(&self) -> Result<Vec<PatientRecord>, StorageError> {
        Ok(self.read()?.entries.clone())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.entries.len())
    }
}
