use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::usage::TokenUsage;

/// Result of asking the generation service for a clinical summary.
///
/// The dashboard renders either variant; an unavailable report never
/// prevents the rest of the patient view from loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ReportOutcome {
    Generated {
        transaction_id: Uuid,
        model_id: String,
        text: String,
        usage: TokenUsage,
    },
    Unavailable {
        reason: ReportFailure,
        message: String,
    },
}

impl ReportOutcome {
    pub fn unavailable(reason: ReportFailure, message: impl Into<String>) -> Self {
        ReportOutcome::Unavailable {
            reason,
            message: message.into(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ReportOutcome::Generated { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportFailure {
    /// No model from the preference list is available.
    NoModel,
    /// The model call returned an error.
    Invocation,
    /// The model answered with no text.
    EmptyResponse,
}
