use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::questions::QUESTION_COUNT;
use crate::scoring::{self, RiskBand, ValidationError};

/// One daily submission. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckIn {
    pub date: Date,
    /// Mean of `responses`, rounded to two decimals.
    pub score: f64,
    pub responses: Vec<u8>,
    pub narrative: String,
}

impl CheckIn {
    /// Validate the responses and score them.
    pub fn record(
        date: Date,
        responses: Vec<u8>,
        narrative: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let errors = scoring::validate_responses(&responses);
        if !errors.is_empty() {
            return Err(CoreError::InvalidCheckIn { errors });
        }

        let score = scoring::wellness_score(&responses).ok_or(CoreError::InvalidCheckIn {
            errors: vec![ValidationError::WrongCount {
                expected: QUESTION_COUNT,
                actual: 0,
            }],
        })?;

        Ok(Self {
            date,
            score,
            responses,
            narrative: narrative.into(),
        })
    }

    /// Like [`CheckIn::record`], for responses that have not been narrowed
    /// to `u8` yet. Out-of-range values surface as validation errors.
    pub fn record_raw(
        date: Date,
        raw: &[i64],
        narrative: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let errors = scoring::validate_responses(raw);
        if !errors.is_empty() {
            return Err(CoreError::InvalidCheckIn { errors });
        }

        let responses = raw.iter().filter_map(|&v| u8::try_from(v).ok()).collect();
        Self::record(date, responses, narrative)
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }
}
