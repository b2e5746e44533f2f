//! The fixed daily check-in questionnaire.
//!
//! Every check-in answers all of these, in this order, on a 1–5 scale.
//! Response vectors are positional: `responses[i]` answers `QUESTIONS[i]`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of questions in a check-in.
pub const QUESTION_COUNT: usize = 20;

/// Lowest allowed slider value.
pub const RESPONSE_MIN: u8 = 1;

/// Highest allowed slider value.
pub const RESPONSE_MAX: u8 = 5;

pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "Mood stability",
    "Anxiety intensity",
    "Emotional regulation",
    "Irritability",
    "Calmness",
    "Negative thoughts",
    "Overthinking",
    "Focus",
    "Decision difficulty",
    "Thinking clarity",
    "Sleep quality",
    "Sleep satisfaction",
    "Energy",
    "Appetite",
    "Physical tension",
    "Motivation",
    "Social connection",
    "Work/study stress",
    "Feeling overwhelmed",
    "Overall well-being",
];

/// A question as presented to the patient form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Zero-based position in the response vector.
    pub index: usize,
    pub label: String,
    pub min: u8,
    pub max: u8,
}

/// The questionnaire in response order.
pub fn catalogue() -> Vec<Question> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, label)| Question {
            index,
            label: (*label).to_string(),
            min: RESPONSE_MIN,
            max: RESPONSE_MAX,
        })
        .collect()
}

/// Format responses as `- Question: value` lines for a model prompt.
///
/// Pairs beyond the shorter of the two sequences are skipped.
pub fn to_structured_input(responses: &[u8]) -> String {
    let mut output = String::new();
    for (label, value) in QUESTIONS.iter().zip(responses) {
        output.push_str(&format!("- {label}: {value}\n"));
    }
    output
}
