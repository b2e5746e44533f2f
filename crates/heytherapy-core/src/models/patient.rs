use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::check_in::CheckIn;

/// A patient's check-in history plus the clinician's review state.
///
/// Only constructed together with a first check-in, so `history` is never
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    patient_id: String,
    history: Vec<CheckIn>,
    clinical_notes: String,
    verified: bool,
}

impl PatientRecord {
    pub fn new(patient_id: impl Into<String>, first: CheckIn) -> Self {
        Self {
            patient_id: patient_id.into(),
            history: vec![first],
            clinical_notes: String::new(),
            verified: false,
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Check-ins in the order they were submitted.
    pub fn history(&self) -> &[CheckIn] {
        &self.history
    }

    pub fn latest(&self) -> &CheckIn {
        // Non-empty by construction.
        &self.history[self.history.len() - 1]
    }

    pub fn clinical_notes(&self) -> &str {
        &self.clinical_notes
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn append(&mut self, check_in: CheckIn) {
        self.history.push(check_in);
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }

    pub fn set_clinical_notes(&mut self, notes: impl Into<String>) {
        self.clinical_notes = notes.into();
    }

    /// Historical scores in submission order.
    pub fn scores(&self) -> Vec<f64> {
        self.history.iter().map(|c| c.score).collect()
    }
}

/// A clinician's edit to a record's review state. Absent fields are left
/// unchanged; present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewUpdate {
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub clinical_notes: Option<String>,
}

impl PatientRecord {
    pub fn apply_review(&mut self, update: ReviewUpdate) {
        if let Some(verified) = update.verified {
            self.verified = verified;
        }
        if let Some(notes) = update.clinical_notes {
            self.clinical_notes = notes;
        }
    }
}
