use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use heytherapy_bedrock::report::request_report;
use heytherapy_core::models::check_in::CheckIn;
use heytherapy_core::models::dashboard::{self, OverviewRow, TrendPoint};
use heytherapy_core::models::patient::{PatientRecord, ReviewUpdate};
use heytherapy_core::models::report::ReportOutcome;
use heytherapy_core::scoring::RiskBand;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub const EMPTY_STORE_WARNING: &str = "No patient data available yet.";

#[derive(Serialize)]
pub struct Overview {
    pub rows: Vec<OverviewRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

/// The clinician's view of one patient, without the generated report.
#[derive(Serialize)]
pub struct PatientView {
    pub patient_id: String,
    pub latest: CheckIn,
    pub risk_band: RiskBand,
    pub risk_label: &'static str,
    pub trend: Vec<TrendPoint>,
    pub clinical_notes: String,
    pub verified: bool,
}

impl From<&PatientRecord> for PatientView {
    fn from(record: &PatientRecord) -> Self {
        let latest = record.latest().clone();
        let risk_band = latest.risk_band();
        Self {
            patient_id: record.patient_id().to_string(),
            latest,
            risk_band,
            risk_label: risk_band.label(),
            trend: dashboard::trend(record.history()),
            clinical_notes: record.clinical_notes().to_string(),
            verified: record.verified(),
        }
    }
}

#[derive(Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub patient: PatientView,
    pub report: ReportOutcome,
}

pub(crate) fn load_record(state: &AppState, id: &str) -> Result<PatientRecord, ApiError> {
    state
        .store
        .get(id)?
        .ok_or_else(|| ApiError::NotFound(format!("patient not found: {id}")))
}

pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Overview>, ApiError> {
    let records = state.store.list()?;
    let warning = records.is_empty().then_some(EMPTY_STORE_WARNING);
    Ok(Json(Overview {
        rows: dashboard::overview(&records),
        warning,
    }))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientView>, ApiError> {
    let record = load_record(&state, &id)?;
    Ok(Json(PatientView::from(&record)))
}

pub async fn get_trend(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TrendPoint>>, ApiError> {
    let record = load_record(&state, &id)?;
    Ok(Json(dashboard::trend(record.history())))
}

/// Patient view plus a freshly requested report. A report failure only
/// affects the `report` field.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DashboardView>, ApiError> {
    let record = load_record(&state, &id)?;
    let report = request_report(state.reports.as_ref(), &record).await;
    Ok(Json(DashboardView {
        patient: PatientView::from(&record),
        report,
    }))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<ReviewUpdate>,
) -> Result<Json<PatientView>, ApiError> {
    let record = state.store.review(&id, update)?;
    tracing::info!(patient_id = %id, verified = record.verified(), "clinician review saved");
    Ok(Json(PatientView::from(&record)))
}
