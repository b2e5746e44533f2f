use axum::Json;
use axum::extract::{Path, State};

use heytherapy_bedrock::models::ModelSelection;
use heytherapy_bedrock::report::request_report;
use heytherapy_core::models::report::ReportOutcome;

use crate::error::ApiError;
use crate::routes::patients::load_record;
use crate::state::AppState;

pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReportOutcome>, ApiError> {
    let record = load_record(&state, &id)?;
    Ok(Json(request_report(state.reports.as_ref(), &record).await))
}

pub async fn get_model(State(state): State<AppState>) -> Json<ModelSelection> {
    Json(state.model.as_ref().clone())
}
