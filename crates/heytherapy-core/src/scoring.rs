use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::questions::{QUESTION_COUNT, QUESTIONS, RESPONSE_MAX, RESPONSE_MIN};

/// Upper bound (inclusive) of the high-risk band.
pub const HIGH_RISK_MAX: f64 = 2.0;

/// Upper bound (inclusive) of the moderate-risk band.
pub const MODERATE_RISK_MAX: f64 = 3.5;

/// Risk tier derived from a wellness score.
///
/// Ordered by severity, so `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Classify a wellness score. Boundary values fall into the lower
    /// (more severe) band.
    pub fn from_score(score: f64) -> Self {
        if score <= HIGH_RISK_MAX {
            RiskBand::High
        } else if score <= MODERATE_RISK_MAX {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::High => "High risk",
            RiskBand::Moderate => "Moderate risk",
            RiskBand::Low => "Low risk",
        }
    }
}

/// Mean of the responses rounded to two decimals, or `None` for an empty
/// slice.
pub fn wellness_score(responses: &[u8]) -> Option<f64> {
    if responses.is_empty() {
        return None;
    }
    let sum: u32 = responses.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / responses.len() as f64;
    Some(round2(mean))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A problem with a submitted response vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("expected {expected} responses, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("{question}: response {value} is outside range [{min}, {max}]")]
    OutOfRange {
        question: String,
        value: i64,
        min: u8,
        max: u8,
    },
}

/// Check a response vector against the questionnaire. An empty result
/// means the vector is valid.
///
/// Accepts any integer width so raw request values are range-checked
/// before they are narrowed to `u8`.
pub fn validate_responses<T: Copy + Into<i64>>(responses: &[T]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if responses.len() != QUESTION_COUNT {
        errors.push(ValidationError::WrongCount {
            expected: QUESTION_COUNT,
            actual: responses.len(),
        });
    }

    let range = i64::from(RESPONSE_MIN)..=i64::from(RESPONSE_MAX);
    for (question, &value) in QUESTIONS.iter().zip(responses) {
        let value: i64 = value.into();
        if !range.contains(&value) {
            errors.push(ValidationError::OutOfRange {
                question: (*question).to_string(),
                value,
                min: RESPONSE_MIN,
                max: RESPONSE_MAX,
            });
        }
    }

    errors
}
