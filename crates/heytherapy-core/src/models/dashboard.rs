//! Read-only projections for the clinician dashboard.
//!
//! Both projections keep submission order. Nothing here sorts by date: a
//! check-in submitted with an earlier date than its predecessor still
//! appears after it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::check_in::CheckIn;
use super::patient::PatientRecord;
use crate::scoring::RiskBand;

/// One line of the all-patients overview, built from the latest check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverviewRow {
    pub patient_id: String,
    pub latest_score: f64,
    pub risk_band: RiskBand,
    pub last_check_in: Date,
}

/// A single point on a patient's score chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub date: Date,
    pub score: f64,
}

/// One row per record, in the order the records are yielded.
pub fn overview<'a>(records: impl IntoIterator<Item = &'a PatientRecord>) -> Vec<OverviewRow> {
    records
        .into_iter()
        .map(|record| {
            let latest = record.latest();
            OverviewRow {
                patient_id: record.patient_id().to_string(),
                latest_score: latest.score,
                risk_band: latest.risk_band(),
                last_check_in: latest.date,
            }
        })
        .collect()
}

pub fn trend(history: &[CheckIn]) -> Vec<TrendPoint> {
    history
        .iter()
        .map(|c| TrendPoint {
            date: c.date,
            score: c.score,
        })
        .collect()
}
