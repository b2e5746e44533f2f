//! Prompt assembly for the clinician summary.

use heytherapy_core::models::patient::PatientRecord;
use heytherapy_core::questions;
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "\
You are a clinical decision-support assistant writing for a licensed mental-health \
clinician. You receive a patient's self-reported daily check-in data: a wellness score \
from 1 (worst) to 5 (best), the history of that score, twenty 1-5 slider responses, and \
an optional free-text note from the patient.

Write a concise clinical summary with these sections:
1. Overall status and trend
2. Notable responses and risk indicators
3. Suggested follow-up for the clinician

Do not diagnose. Flag any language suggesting self-harm prominently. Keep the summary \
under 400 words.";

/// Substituted for an empty patient narrative.
pub const NARRATIVE_PLACEHOLDER: &str = "No narrative provided.";

/// Everything the model sees about one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient_id: String,
    pub latest_score: f64,
    /// Scores in submission order, oldest first.
    pub historical_scores: Vec<f64>,
    pub responses: Vec<u8>,
    pub narrative: String,
}

impl ReportRequest {
    pub fn from_record(record: &PatientRecord) -> Self {
        let latest = record.latest();
        Self {
            patient_id: record.patient_id().to_string(),
            latest_score: latest.score,
            historical_scores: record.scores(),
            responses: latest.responses.clone(),
            narrative: latest.narrative.clone(),
        }
    }

    /// Render the user message sent alongside [`SYSTEM_PROMPT`].
    pub fn to_user_message(&self) -> String {
        let history = self
            .historical_scores
            .iter()
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>()
            .join(", ");

        let narrative = if self.narrative.trim().is_empty() {
            NARRATIVE_PLACEHOLDER
        } else {
            self.narrative.as_str()
        };

        let mut message = String::new();
        message.push_str(&format!("Latest wellness score: {:.2}\n", self.latest_score));
        message.push_str(&format!("Score history (oldest first): {history}\n\n"));
        message.push_str("Latest responses (1-5):\n");
        message.push_str(&questions::to_structured_input(&self.responses));
        message.push_str("\nPatient narrative:\n");
        message.push_str(narrative);
        message.push('\n');
        message
    }
}
