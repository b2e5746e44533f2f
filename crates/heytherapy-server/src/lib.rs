//! heytherapy-server
//!
//! HTTP surface for the patient check-in form and the clinician dashboard.
//! The binary in `main.rs` wires real Bedrock and the in-memory store into
//! [`router`]; tests wire fakes into the same router.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/model", get(routes::reports::get_model))
        // Patient
        .route("/questions", get(routes::questions::list_questions))
        .route("/check-ins", post(routes::check_ins::submit_check_in))
        // Doctor
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route("/patients/{id}/trend", get(routes::patients::get_trend))
        .route(
            "/patients/{id}/dashboard",
            get(routes::patients::get_dashboard),
        )
        .route("/patients/{id}/review", put(routes::patients::update_review))
        .route("/patients/{id}/report", post(routes::reports::generate_report))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
