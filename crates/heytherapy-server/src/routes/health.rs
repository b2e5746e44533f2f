use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    /// Report model in use, if one was resolved.
    model: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        model: state.model.model().map(|m| m.model_id.clone()),
    })
}
