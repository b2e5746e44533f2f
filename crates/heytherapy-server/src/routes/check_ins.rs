use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use heytherapy_core::models::check_in::CheckIn;
use heytherapy_core::safety;
use heytherapy_core::scoring::RiskBand;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub patient_id: String,
    /// Wider than `u8` so out-of-range values reach validation.
    pub responses: Vec<i64>,
    #[serde(default)]
    pub narrative: String,
}

#[derive(Serialize)]
pub struct CheckInReceipt {
    pub patient_id: String,
    pub check_in: CheckIn,
    pub risk_band: RiskBand,
    pub history_len: usize,
    /// Present when the narrative mentions self-harm. The check-in is
    /// stored either way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_notice: Option<&'static str>,
}

pub async fn submit_check_in(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CheckInRequest>,
) -> Result<Json<CheckInReceipt>, ApiError> {
    let check_in = CheckIn::record_raw((state.today)(), &req.responses, req.narrative)?;

    let emergency_notice = safety::emergency_notice(&check_in.narrative);
    if emergency_notice.is_some() {
        tracing::warn!(patient_id = %req.patient_id, "check-in narrative flagged for self-harm");
    }

    let record = state
        .store
        .append_check_in(&req.patient_id, check_in.clone())?;

    Ok(Json(CheckInReceipt {
        patient_id: req.patient_id,
        risk_band: check_in.risk_band(),
        check_in,
        history_len: record.history().len(),
        emergency_notice,
    }))
}
